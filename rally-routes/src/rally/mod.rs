//! Rally booking API client.
//!
//! Two endpoints matter: the station list, and the transfer timeframes for
//! an ordered pair of stations. Responses are deserialized into wire DTOs
//! and then converted to validated domain types.

mod client;
mod convert;
mod error;
mod types;

pub use client::{RallyClient, RallyClientConfig};
pub use convert::{ConversionError, convert_stations, convert_timeframes};
pub use error::{ErrorKind, RallyError};
pub use types::{
    CoordinatesDto, StationDto, StationsResponse, TimeframeDto, TimeframesResponse,
    TranslationDto,
};
