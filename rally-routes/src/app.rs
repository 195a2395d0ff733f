//! The fetch → aggregate → print pipeline.

use std::io::Write;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::i18n::Language;
use crate::present::Presenter;
use crate::rally::{RallyClient, RallyClientConfig};
use crate::routes::build_routes;

/// Options chosen on the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub language: Language,
    /// Maximum timeframe requests in flight.
    pub concurrency: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            concurrency: 1,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stations: usize,
    pub routes: usize,
}

/// Fetch all stations, query every ordered pair, and write each route with
/// availability to `out` as soon as it is known.
///
/// Any error aborts the run. Routes written before the failure remain in
/// `out`.
pub async fn run<W: Write>(
    config: &AppConfig,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunSummary, AppError> {
    let presenter = Presenter::new(options.language, &config.maps)?;
    let client = RallyClient::new(
        RallyClientConfig::from_api(&config.api).with_language(options.language),
    )?;

    info!("{}", options.language.messages().obtaining_station_list);
    let stations = client.fetch_stations().await?;
    info!(
        stations = stations.len(),
        pairs = stations.len() * stations.len().saturating_sub(1),
        "Querying transfer windows"
    );

    let routes = build_routes(&stations, &client, options.concurrency);
    let written = presenter.render_all(routes, out).await?;

    debug!(routes = written, "Done");
    Ok(RunSummary {
        stations: stations.len(),
        routes: written,
    })
}
