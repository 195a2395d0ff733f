//! Rally booking API HTTP client.
//!
//! Issues one GET per call, with no retries and no caching. Every failure
//! is returned to the caller.

use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::domain::{DateInterval, Station, StationId};
use crate::i18n::Language;
use crate::routes::TransferWindowSource;

use super::convert::{convert_stations, convert_timeframes};
use super::error::RallyError;
use super::types::{StationsResponse, TimeframesResponse};

/// Header the booking site uses to label its own API calls.
const REQUEST_ALIAS: &str = "x-requested-alias";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum number of body characters kept in parse errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the rally client.
#[derive(Debug, Clone)]
pub struct RallyClientConfig {
    /// Full URL of the station list endpoint
    pub stations_url: String,
    /// Full URL of the timeframes endpoint
    pub timeframes_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language requested from the API
    pub language: Language,
}

impl RallyClientConfig {
    /// Create a config from the `[api]` section of the configuration file.
    pub fn from_api(api: &ApiConfig) -> Self {
        Self {
            stations_url: api.stations_url(),
            timeframes_url: api.timeframes_url(),
            timeout_secs: api.timeout_secs,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Client for the rally booking API.
#[derive(Debug, Clone)]
pub struct RallyClient {
    http: reqwest::Client,
    stations_url: String,
    timeframes_url: String,
}

impl RallyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RallyClientConfig) -> Result<Self, RallyError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(config.language.accept_language())
                .map_err(|_| RallyError::InvalidHeader("Accept-Language"))?,
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            stations_url: config.stations_url,
            timeframes_url: config.timeframes_url,
        })
    }

    /// Fetch every station, in the order the API lists them.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, RallyError> {
        let request = self
            .http
            .get(&self.stations_url)
            .header(REQUEST_ALIAS, "rally.startStations");

        let response: StationsResponse =
            self.get_json(request).await?.ok_or_else(|| RallyError::Parse {
                message: "empty station list response".to_string(),
                body: None,
            })?;

        let stations = convert_stations(response).map_err(|e| RallyError::Parse {
            message: e.to_string(),
            body: None,
        })?;

        debug!(count = stations.len(), "Fetched stations");
        Ok(stations)
    }

    /// Fetch the bookable windows for relocating from `origin` to
    /// `destination`.
    ///
    /// No availability is an empty vector, whether the API sends an empty
    /// array, `null`, or an empty body.
    pub async fn fetch_transfer_windows(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Vec<DateInterval>, RallyError> {
        let request = self
            .http
            .get(&self.timeframes_url)
            .query(&[("from", origin.get()), ("to", destination.get())])
            .header(REQUEST_ALIAS, "rally.timeframes");

        let Some(response) = self.get_json::<TimeframesResponse>(request).await? else {
            return Ok(Vec::new());
        };

        convert_timeframes(response.into_timeframes()).map_err(|e| RallyError::Parse {
            message: format!("timeframes {origin}->{destination}: {e}"),
            body: None,
        })
    }

    /// Send a request and decode its JSON body.
    ///
    /// Returns `None` for an empty or `null` body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, RallyError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RallyError::Status {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        let body = response.text().await?;
        let trimmed = body.trim();

        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| RallyError::Parse {
                message: e.to_string(),
                body: Some(excerpt(&body)),
            })
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

impl TransferWindowSource for RallyClient {
    type Error = RallyError;

    async fn transfer_windows(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Vec<DateInterval>, RallyError> {
        self.fetch_transfer_windows(origin, destination).await
    }
}
