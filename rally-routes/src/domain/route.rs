//! Rally routes.

use super::interval::DateInterval;
use super::station::Station;

/// A one-way relocation between two distinct stations with at least one
/// bookable window.
///
/// Both invariants are checked in [`Route::new`]; a pair that violates them
/// simply has no route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    origin: Station,
    destination: Station,
    windows: Vec<DateInterval>,
}

impl Route {
    /// Build a route, or `None` if there is no availability or the pair is
    /// a station paired with itself.
    pub fn new(origin: Station, destination: Station, windows: Vec<DateInterval>) -> Option<Self> {
        if windows.is_empty() || origin.id() == destination.id() {
            return None;
        }
        Some(Self {
            origin,
            destination,
            windows,
        })
    }

    pub fn origin(&self) -> &Station {
        &self.origin
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }

    /// Transfer windows in the order the API returned them. Never empty.
    pub fn windows(&self) -> &[DateInterval] {
        &self.windows
    }
}
