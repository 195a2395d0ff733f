//! Map directions URL generation.

use reqwest::Url;

use crate::domain::{DEFAULT_LANGUAGE_CODE, Route, Station};

/// Generate a directions URL for a route.
///
/// The origin and destination waypoints are appended to `base` as two path
/// segments, in the form Google Maps' `/maps/dir/` accepts. A station with
/// coordinates contributes `lat,lng`; one without contributes its
/// default-language name, percent-encoded.
///
/// # Example
///
/// ```ignore
/// // Madrid (40.4168,-3.7038) to Berlin (52.52,13.405):
/// let url = directions_url(&base, &route);
/// // Returns: "https://www.google.com/maps/dir/40.4168,-3.7038/52.52,13.405"
/// ```
pub fn directions_url(base: &Url, route: &Route) -> String {
    let mut url = base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(&waypoint(route.origin()))
            .push(&waypoint(route.destination()));
    }

    url.to_string()
}

fn waypoint(station: &Station) -> String {
    match station.coordinates() {
        Some(coordinates) => coordinates.to_string(),
        None => station.display_name(DEFAULT_LANGUAGE_CODE),
    }
}
