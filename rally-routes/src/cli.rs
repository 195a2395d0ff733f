//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::i18n::Language;

/// List rally van-relocation routes and their available transfer dates.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Output language
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    pub language: Language,

    /// Configuration file, created from the bundled example if missing
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Maximum timeframe requests in flight (output order is unaffected)
    #[arg(short = 'j', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=16))]
    pub concurrency: u16,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// Status lines from this crate are logged at info and shown by default.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,rally_routes=info",
            1 => "warn,rally_routes=debug",
            _ => "warn,rally_routes=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rally-routes"]).unwrap();
        assert_eq!(args.language, Language::En);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(args.concurrency, 1);
        assert_eq!(args.default_log_filter(), "warn,rally_routes=info");
    }

    #[test]
    fn custom_language() {
        let args = Args::try_parse_from(["rally-routes", "--language", "es"]).unwrap();
        assert_eq!(args.language, Language::Es);

        let args = Args::try_parse_from(["rally-routes", "-l", "de"]).unwrap();
        assert_eq!(args.language, Language::De);
    }

    #[test]
    fn status_lines_visible_by_default() {
        let args = Args::try_parse_from(["rally-routes"]).unwrap();
        assert!(args.default_log_filter().contains("rally_routes=info"));

        let args = Args::try_parse_from(["rally-routes", "-v"]).unwrap();
        assert_eq!(args.default_log_filter(), "warn,rally_routes=debug");
    }

    #[test]
    fn unsupported_language_rejected() {
        assert!(Args::try_parse_from(["rally-routes", "-l", "fr"]).is_err());
    }

    #[test]
    fn config_and_concurrency() {
        let args =
            Args::try_parse_from(["rally-routes", "-c", "/tmp/rally.toml", "-j", "4", "-vv"])
                .unwrap();
        assert_eq!(args.config, PathBuf::from("/tmp/rally.toml"));
        assert_eq!(args.concurrency, 4);
        assert_eq!(args.default_log_filter(), "warn,rally_routes=trace");
    }

    #[test]
    fn concurrency_bounds() {
        assert!(Args::try_parse_from(["rally-routes", "-j", "0"]).is_err());
        assert!(Args::try_parse_from(["rally-routes", "-j", "17"]).is_err());
    }
}
