//! Output languages and UI strings.
//!
//! Every language carries a complete [`Messages`] table, so there is no
//! per-key fallback to worry about at runtime.

use std::fmt;

use clap::ValueEnum;

use crate::domain::DEFAULT_LANGUAGE_CODE;

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Es,
    De,
}

/// Localized UI strings for one language.
#[derive(Debug)]
pub struct Messages {
    pub obtaining_station_list: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub route: &'static str,
    pub available_dates: &'static str,
    pub no_routes_found: &'static str,
    /// `chrono` format string for displaying dates.
    pub date_format: &'static str,
}

const EN: Messages = Messages {
    obtaining_station_list: "Obtaining station list...",
    origin: "Origin",
    destination: "Destination",
    route: "Route",
    available_dates: "Available dates",
    no_routes_found: "No rally routes found",
    date_format: "%d/%m/%Y",
};

const ES: Messages = Messages {
    obtaining_station_list: "Obteniendo listado de estaciones...",
    origin: "Origen",
    destination: "Destino",
    route: "Ruta",
    available_dates: "Fechas disponibles",
    no_routes_found: "No se han encontrado rutas rally",
    date_format: "%d/%m/%Y",
};

const DE: Messages = Messages {
    obtaining_station_list: "Stationsliste wird abgerufen...",
    origin: "Abfahrt",
    destination: "Ziel",
    route: "Route",
    available_dates: "Verfügbare Daten",
    no_routes_found: "Keine Rally-Routen gefunden",
    date_format: "%d.%m.%Y",
};

impl Language {
    /// Two-letter code, as used for station name translations.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => DEFAULT_LANGUAGE_CODE,
            Language::Es => "es",
            Language::De => "de",
        }
    }

    /// Value for the `Accept-Language` request header.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Language::En => "en-GB,en;q=0.7",
            Language::Es => "es-ES,es;q=0.7",
            Language::De => "de-DE,de;q=0.7",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::Es => &ES,
            Language::De => &DE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().code(), DEFAULT_LANGUAGE_CODE);
    }

    #[test]
    fn codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Es.code(), "es");
        assert_eq!(Language::De.code(), "de");
        assert_eq!(Language::Es.to_string(), "es");
    }

    #[test]
    fn accept_language_starts_with_code() {
        for lang in Language::value_variants() {
            assert!(lang.accept_language().starts_with(lang.code()));
        }
    }

    #[test]
    fn localized_strings() {
        assert_eq!(Language::En.messages().origin, "Origin");
        assert_eq!(Language::Es.messages().origin, "Origen");
        assert_eq!(Language::De.messages().destination, "Ziel");
    }

    #[test]
    fn parses_from_cli_value() {
        assert_eq!(Language::from_str("es", true).unwrap(), Language::Es);
        assert_eq!(Language::from_str("DE", true).unwrap(), Language::De);
        assert!(Language::from_str("fr", true).is_err());
    }
}
