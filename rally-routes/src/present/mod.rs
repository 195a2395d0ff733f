//! Route presentation.
//!
//! Formats routes as localized text blocks and streams them to a writer.

mod directions;

pub use directions::directions_url;

use std::io::Write;
use std::pin::pin;

use futures::{Stream, StreamExt};
use reqwest::Url;
use tracing::debug;

use crate::config::{ConfigError, MapsConfig};
use crate::domain::{DateInterval, Route};
use crate::error::AppError;
use crate::i18n::Language;

/// Formats routes for one output language.
#[derive(Debug, Clone)]
pub struct Presenter {
    language: Language,
    directions_base: Url,
}

impl Presenter {
    /// Create a presenter from the `[maps]` section of the configuration.
    pub fn new(language: Language, maps: &MapsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            language,
            directions_base: maps.directions_base()?,
        })
    }

    /// Render one route as a text block, ending with a blank line.
    pub fn format_route(&self, route: &Route) -> String {
        let messages = self.language.messages();
        let code = self.language.code();

        let dates = route
            .windows()
            .iter()
            .map(|w| self.format_interval(w))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n\n",
            messages.origin,
            route.origin().display_name(code),
            messages.destination,
            route.destination().display_name(code),
            messages.route,
            self.directions_url(route),
            messages.available_dates,
            dates,
        )
    }

    /// Render an interval as `[start - end]` in the language's date format.
    pub fn format_interval(&self, interval: &DateInterval) -> String {
        let format = self.language.messages().date_format;
        format!(
            "[{} - {}]",
            interval.start().format(format),
            interval.end().format(format)
        )
    }

    pub fn directions_url(&self, route: &Route) -> String {
        directions_url(&self.directions_base, route)
    }

    /// Write every route as it arrives, flushing after each block.
    ///
    /// Returns the number of routes written. Stops at the first error;
    /// blocks already written stay written.
    pub async fn render_all<S, E, W>(&self, routes: S, out: &mut W) -> Result<usize, AppError>
    where
        S: Stream<Item = Result<Route, E>>,
        AppError: From<E>,
        W: Write,
    {
        let mut routes = pin!(routes);
        let mut written = 0;

        while let Some(route) = routes.next().await {
            let route = route?;
            out.write_all(self.format_route(&route).as_bytes())?;
            out.flush()?;
            written += 1;
            debug!(
                origin = %route.origin().id(),
                destination = %route.destination().id(),
                "Printed route"
            );
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Station};
    use crate::rally::RallyError;
    use chrono::NaiveDate;
    use futures::stream;

    fn maps() -> MapsConfig {
        MapsConfig {
            directions_url: "https://www.google.com/maps/dir".to_string(),
        }
    }

    fn presenter(language: Language) -> Presenter {
        Presenter::new(language, &maps()).unwrap()
    }

    fn madrid_berlin() -> Route {
        let madrid = Station::new(1)
            .with_name("en", "Madrid")
            .with_coordinates(Coordinates::new(40.4168, -3.7038).unwrap());
        let berlin = Station::new(2)
            .with_name("en", "Berlin")
            .with_name("de", "Berlin Hbf")
            .with_coordinates(Coordinates::new(52.52, 13.405).unwrap());
        let windows = vec![
            DateInterval::parse("2024-06-01", "2024-06-05").unwrap(),
            DateInterval::parse("2024-07-10", "2024-07-12").unwrap(),
        ];
        Route::new(madrid, berlin, windows).unwrap()
    }

    #[test]
    fn format_english_block() {
        let text = presenter(Language::En).format_route(&madrid_berlin());
        assert_eq!(
            text,
            "Origin: Madrid\n\
             Destination: Berlin\n\
             Route: https://www.google.com/maps/dir/40.4168,-3.7038/52.52,13.405\n\
             Available dates: [01/06/2024 - 05/06/2024] [10/07/2024 - 12/07/2024]\n\
             \n"
        );
    }

    #[test]
    fn format_german_uses_translations_and_fallback() {
        let text = presenter(Language::De).format_route(&madrid_berlin());
        assert!(text.starts_with("Abfahrt: Madrid\n"));
        assert!(text.contains("Ziel: Berlin Hbf\n"));
        assert!(text.contains("[01.06.2024 - 05.06.2024]"));
    }

    #[test]
    fn format_spanish_labels() {
        let text = presenter(Language::Es).format_route(&madrid_berlin());
        assert!(text.starts_with("Origen: Madrid\n"));
        assert!(text.contains("Fechas disponibles: [01/06/2024 - 05/06/2024]"));
    }

    #[test]
    fn invalid_directions_url_rejected() {
        let maps = MapsConfig {
            directions_url: "mailto:someone@example.com".to_string(),
        };
        assert!(Presenter::new(Language::En, &maps).is_err());
    }

    #[tokio::test]
    async fn render_all_streams_blocks_in_order() {
        let presenter = presenter(Language::En);
        let route = madrid_berlin();
        let routes = stream::iter(vec![Ok::<_, RallyError>(route.clone()), Ok(route.clone())]);

        let mut out = Vec::new();
        let written = presenter.render_all(routes, &mut out).await.unwrap();

        assert_eq!(written, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, presenter.format_route(&route).repeat(2));
    }

    #[tokio::test]
    async fn render_all_keeps_output_before_error() {
        let presenter = presenter(Language::En);
        let route = madrid_berlin();
        let routes = stream::iter(vec![
            Ok(route.clone()),
            Err(RallyError::Status {
                status: 500,
                message: String::new(),
            }),
            Ok(route.clone()),
        ]);

        let mut out = Vec::new();
        let err = presenter.render_all(routes, &mut out).await.unwrap_err();

        assert!(matches!(err, AppError::Rally(RallyError::Status { status: 500, .. })));
        assert_eq!(String::from_utf8(out).unwrap(), presenter.format_route(&route));
    }

    #[tokio::test]
    async fn render_all_empty_writes_nothing() {
        let routes = stream::iter(Vec::<Result<Route, RallyError>>::new());
        let mut out = Vec::new();
        let written = presenter(Language::En)
            .render_all(routes, &mut out)
            .await
            .unwrap();

        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_date() -> impl Strategy<Value = NaiveDate> {
            (1990i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        fn any_language() -> impl Strategy<Value = Language> {
            prop_oneof![Just(Language::En), Just(Language::Es), Just(Language::De)]
        }

        proptest! {
            /// Re-parsing the formatted dates yields the original interval
            #[test]
            fn formatted_dates_roundtrip(
                a in any_date(),
                b in any_date(),
                language in any_language(),
            ) {
                let (start, end) = if a <= b { (a, b) } else { (b, a) };
                let interval = DateInterval::new(start, end).unwrap();
                let presenter = presenter(language);
                let text = presenter.format_interval(&interval);

                let inner = text.trim_start_matches('[').trim_end_matches(']');
                let (s, e) = inner.split_once(" - ").unwrap();
                let format = language.messages().date_format;

                prop_assert_eq!(NaiveDate::parse_from_str(s, format).unwrap(), start);
                prop_assert_eq!(NaiveDate::parse_from_str(e, format).unwrap(), end);
            }

            /// Every window appears in the rendered block
            #[test]
            fn block_contains_each_interval(a in any_date(), days in 0i64..60) {
                let end = a + chrono::Duration::days(days);
                let interval = DateInterval::new(a, end).unwrap();
                let route = Route::new(Station::new(1), Station::new(2), vec![interval]).unwrap();
                let presenter = presenter(Language::En);
                let block = presenter.format_route(&route);

                prop_assert!(block.contains(&presenter.format_interval(&interval)));
            }
        }
    }
}
