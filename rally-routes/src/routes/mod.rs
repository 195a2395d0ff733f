//! Route aggregation.
//!
//! Turns the station list plus per-pair availability into a lazy stream of
//! [`Route`]s, skipping pairs with no bookable window.

mod aggregate;

pub use aggregate::{TransferWindowSource, build_routes, station_pairs};
