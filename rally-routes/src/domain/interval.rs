//! Transfer window date intervals.

use std::fmt;

use chrono::NaiveDate;

use super::error::DomainError;

/// Date format used by the booking API.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an API date.
///
/// The API sends either a bare `YYYY-MM-DD` date or a full ISO datetime;
/// only the date part is meaningful for a transfer window, so anything after
/// the first 10 characters is ignored.
pub fn parse_api_date(s: &str) -> Result<NaiveDate, DomainError> {
    let date_part = s
        .trim()
        .get(..10)
        .ok_or_else(|| DomainError::InvalidDate(s.to_string()))?;

    NaiveDate::parse_from_str(date_part, API_DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// An inclusive date range during which a relocation is bookable.
///
/// `start <= end` is guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Create an interval, rejecting one that ends before it starts.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse an interval from the API's start/end date strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(parse_api_date(start)?, parse_api_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(API_DATE_FORMAT),
            self.end.format(API_DATE_FORMAT)
        )
    }
}
