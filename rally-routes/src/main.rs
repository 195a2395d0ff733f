use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rally_routes::app::{RunOptions, run};
use rally_routes::cli::Args;
use rally_routes::config::AppConfig;
use rally_routes::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only route listings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run_cli(&args).await {
        Ok(0) => {
            eprintln!("{}", args.language.messages().no_routes_found);
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Load the configuration and run the pipeline. Returns the route count.
async fn run_cli(args: &Args) -> Result<usize, AppError> {
    let config = AppConfig::load_or_create(&args.config)?;
    let options = RunOptions {
        language: args.language,
        concurrency: usize::from(args.concurrency),
    };

    let mut stdout = std::io::stdout().lock();
    let summary = run(&config, &options, &mut stdout).await?;
    Ok(summary.routes)
}
