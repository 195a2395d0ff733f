//! Domain error types.
//!
//! These errors represent validation failures in data received from the
//! booking API. They are distinct from transport errors.

use chrono::NaiveDate;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Date text that is not `YYYY-MM-DD` (optionally followed by a time)
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// Interval whose end precedes its start
    #[error("invalid interval: end {end} is before start {start}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    /// Coordinates outside the WGS84 ranges
    #[error("coordinates ({latitude}, {longitude}) are outside valid WGS84 ranges")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidDate("yesterday".into());
        assert_eq!(err.to_string(), "invalid date: \"yesterday\"");

        let err = DomainError::InvalidInterval {
            start: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid interval: end 2024-06-01 is before start 2024-06-05"
        );

        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("outside valid WGS84 ranges"));
    }
}
