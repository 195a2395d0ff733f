//! Pairwise route enumeration.

use std::collections::HashSet;
use std::future::Future;
use std::rc::Rc;

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use tracing::{debug, trace};

use crate::domain::{DateInterval, Route, Station, StationId};

/// Source of transfer windows for an ordered station pair.
///
/// Implemented by the HTTP client; tests substitute an in-memory table.
pub trait TransferWindowSource {
    type Error;

    /// Bookable windows for relocating from `origin` to `destination`.
    ///
    /// An empty vector means no availability and is not an error.
    fn transfer_windows(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> impl Future<Output = Result<Vec<DateInterval>, Self::Error>>;
}

/// Every ordered pair of distinct stations, origin-major.
///
/// All destinations for the first station come first, then all for the
/// second, and so on. A repeated id only counts at its first position, so
/// each directional pair appears once and self-pairs never do.
pub fn station_pairs(stations: &[Station]) -> impl Iterator<Item = (&Station, &Station)> {
    let mut seen = HashSet::new();
    let unique: Rc<Vec<&Station>> = Rc::new(
        stations
            .iter()
            .filter(|station| seen.insert(station.id()))
            .collect(),
    );

    let count = unique.len();
    (0..count).flat_map(move |i| {
        let destinations = Rc::clone(&unique);
        let origin = destinations[i];
        (0..count)
            .filter(move |&j| j != i)
            .map(move |j| (origin, destinations[j]))
    })
}

/// Build the lazy, single-pass stream of routes.
///
/// Nothing is fetched until the stream is polled. Up to `concurrency`
/// requests are in flight at once, but routes are always yielded in
/// [`station_pairs`] order; `concurrency` of 1 queries strictly one pair
/// after another. The first error ends the stream for the consumer.
pub fn build_routes<'a, P>(
    stations: &'a [Station],
    source: &'a P,
    concurrency: usize,
) -> impl Stream<Item = Result<Route, P::Error>> + 'a
where
    P: TransferWindowSource,
{
    stream::iter(station_pairs(stations))
        .map(move |(origin, destination)| async move {
            let windows = source
                .transfer_windows(origin.id(), destination.id())
                .await?;
            trace!(
                origin = %origin.id(),
                destination = %destination.id(),
                windows = windows.len(),
                "Fetched transfer windows"
            );
            Ok::<_, P::Error>((origin, destination, windows))
        })
        .buffered(concurrency.max(1))
        .try_filter_map(|(origin, destination, windows)| async move {
            let route = Route::new(origin.clone(), destination.clone(), windows);
            if route.is_none() {
                debug!(
                    origin = %origin.id(),
                    destination = %destination.id(),
                    "No availability, skipping pair"
                );
            }
            Ok::<_, P::Error>(route)
        })
}
