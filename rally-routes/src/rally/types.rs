//! Wire types for the rally booking API.
//!
//! These mirror the JSON the API sends and are deliberately lenient about
//! field naming; validation happens in `convert`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Wrapper for the station list response.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    pub data: Vec<StationDto>,
}

/// A station as the API describes it.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coordinates: Option<CoordinatesDto>,
    /// Localized names keyed by language code.
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesDto {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    pub lng: f64,
}

/// A translation is either the bare name or an object holding it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranslationDto {
    Name(String),
    Fields { name: String },
}

impl TranslationDto {
    pub fn name(&self) -> &str {
        match self {
            TranslationDto::Name(name) | TranslationDto::Fields { name } => name,
        }
    }
}

/// Timeframes come back either as a bare array or wrapped in `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeframesResponse {
    List(Vec<TimeframeDto>),
    Wrapped {
        #[serde(deserialize_with = "null_as_empty")]
        data: Vec<TimeframeDto>,
    },
}

/// `data` must be present, but `null` means the same as `[]`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TimeframeDto>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<TimeframeDto>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TimeframesResponse {
    pub fn into_timeframes(self) -> Vec<TimeframeDto> {
        match self {
            TimeframesResponse::List(list) | TimeframesResponse::Wrapped { data: list } => list,
        }
    }
}

/// One bookable window, dates as the API formats them.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeframeDto {
    #[serde(alias = "startDate")]
    pub start: String,
    #[serde(alias = "endDate")]
    pub end: String,
}
