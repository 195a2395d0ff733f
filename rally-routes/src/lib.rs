//! Rally route finder.
//!
//! Lists one-way van relocation ("rally") routes from a booking API, with
//! the date windows each route can be booked in. The booking site cannot
//! filter by return station, so every ordered station pair is queried.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod present;
pub mod rally;
pub mod routes;
