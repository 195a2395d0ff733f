//! Domain types for the rally route finder.
//!
//! These are the validated forms of what the booking API returns. All
//! types enforce their invariants at construction time, so the aggregator
//! and presenter can trust what they receive.

mod error;
mod interval;
mod route;
mod station;

pub use error::DomainError;
pub use interval::{API_DATE_FORMAT, DateInterval, parse_api_date};
pub use route::Route;
pub use station::{Coordinates, DEFAULT_LANGUAGE_CODE, Station, StationId};
