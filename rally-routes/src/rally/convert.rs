//! Conversion from wire DTOs to domain types.

use std::collections::HashSet;

use crate::domain::{
    Coordinates, DEFAULT_LANGUAGE_CODE, DateInterval, DomainError, Station, StationId,
};

use super::types::{StationDto, StationsResponse, TimeframeDto};

/// A DTO that deserialized but does not describe valid domain data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("station {id}: {source}")]
    Station { id: StationId, source: DomainError },

    #[error("timeframe {index}: {source}")]
    Timeframe { index: usize, source: DomainError },
}

/// Convert the station list, preserving API order.
///
/// Only the first entry for each id is kept, so every directional pair is
/// queried and reported at most once.
pub fn convert_stations(response: StationsResponse) -> Result<Vec<Station>, ConversionError> {
    let mut seen = HashSet::new();
    response
        .data
        .into_iter()
        .filter(|dto| seen.insert(StationId::new(dto.id)))
        .map(convert_station)
        .collect()
}

fn convert_station(dto: StationDto) -> Result<Station, ConversionError> {
    let id = StationId::new(dto.id);
    let mut station = Station::new(id);

    for (language, translation) in &dto.translations {
        station = station.with_name(language.as_str(), translation.name());
    }

    // A top-level name stands in for a missing default translation
    if let Some(name) = dto.name
        && !station.has_name(DEFAULT_LANGUAGE_CODE)
    {
        station = station.with_name(DEFAULT_LANGUAGE_CODE, name);
    }

    if let Some(coords) = dto.coordinates {
        let coordinates = Coordinates::new(coords.lat, coords.lng)
            .map_err(|source| ConversionError::Station { id, source })?;
        station = station.with_coordinates(coordinates);
    }

    Ok(station)
}

/// Convert timeframes to intervals, preserving API order.
pub fn convert_timeframes(
    timeframes: Vec<TimeframeDto>,
) -> Result<Vec<DateInterval>, ConversionError> {
    timeframes
        .iter()
        .enumerate()
        .map(|(index, t)| {
            DateInterval::parse(&t.start, &t.end)
                .map_err(|source| ConversionError::Timeframe { index, source })
        })
        .collect()
}
