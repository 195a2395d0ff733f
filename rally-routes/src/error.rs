//! Top-level error type.

use crate::config::ConfigError;
use crate::rally::RallyError;

/// Any error that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Rally(#[from] RallyError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Rally(_) | AppError::Output(_) => 1,
        }
    }
}
