//! Configuration file loading.
//!
//! The configuration lives in a TOML file. If it does not exist yet, the
//! bundled example is written in its place before loading, so a first run
//! works without any setup.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;
use tracing::info;

/// The example configuration shipped with the binary.
pub const BUNDLED_EXAMPLE: &str = include_str!("../config.example.toml");

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or creating the file failed
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or lacks required keys
    #[error("invalid configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A value is present but unusable
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub maps: MapsConfig,
}

/// Booking API location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Endpoint paths, appended to `base_url`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Endpoints {
    pub stations: String,
    pub timeframes: String,
}

/// Map service used for directions links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapsConfig {
    pub directions_url: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AppConfig {
    /// Load the configuration at `path`, first creating it from the bundled
    /// example if it does not exist.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!(path = %path.display(), "Creating configuration from bundled example");
            write_example(path)?;
        }

        Self::load(path)
    }

    /// Load and validate an existing configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_http_url("api.base_url", &self.api.base_url)?;

        if self.api.endpoints.stations.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.endpoints.stations",
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.endpoints.timeframes.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.endpoints.timeframes",
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "api.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }

        self.maps.directions_base()?;
        Ok(())
    }
}

impl ApiConfig {
    /// Full URL of the station list endpoint.
    pub fn stations_url(&self) -> String {
        join_endpoint(&self.base_url, &self.endpoints.stations)
    }

    /// Full URL of the transfer timeframes endpoint.
    pub fn timeframes_url(&self) -> String {
        join_endpoint(&self.base_url, &self.endpoints.timeframes)
    }
}

impl MapsConfig {
    /// The directions URL, checked to accept appended path segments.
    pub fn directions_base(&self) -> Result<Url, ConfigError> {
        let url = parse_http_url("maps.directions_url", &self.directions_url)?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                field: "maps.directions_url",
                reason: "must accept path segments".to_string(),
            });
        }
        Ok(url)
    }
}

fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::Invalid {
        field,
        reason: format!("{value:?} is not a valid URL: {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::Invalid {
            field,
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}

fn write_example(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    std::fs::write(path, BUNDLED_EXAMPLE).map_err(io_err)
}
