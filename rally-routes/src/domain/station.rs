//! Station types.

use std::collections::BTreeMap;
use std::fmt;

use super::error::DomainError;

/// Language code whose name is used when a requested translation is missing.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Identifier the booking API assigns to a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u64);

impl StationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// WGS84 latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the WGS84 ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Formats as `lat,lng`, the waypoint form map services accept.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A depot where vans are picked up or dropped off.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    /// Display names keyed by language code.
    names: BTreeMap<String, String>,
    coordinates: Option<Coordinates>,
}

impl Station {
    /// Create a station with no names and no coordinates.
    pub fn new(id: impl Into<StationId>) -> Self {
        Self {
            id: id.into(),
            names: BTreeMap::new(),
            coordinates: None,
        }
    }

    /// Add (or replace) the display name for a language.
    pub fn with_name(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(language.into(), name.into());
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Whether a name exists for exactly this language code.
    pub fn has_name(&self, language: &str) -> bool {
        self.names.contains_key(language)
    }

    /// Display name in the requested language.
    ///
    /// Falls back to the default language, then to any name the station
    /// has, then to `#<id>`. Never fails.
    pub fn display_name(&self, language: &str) -> String {
        self.names
            .get(language)
            .or_else(|| self.names.get(DEFAULT_LANGUAGE_CODE))
            .or_else(|| self.names.values().next())
            .cloned()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}
