//! CLI error type.

use std::path::PathBuf;

use seatforge::{ConfigError, InputError, SolveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported problem file extension: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid problem: {0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Solve(#[from] SolveError),

    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 1 when no seating exists, 2 for bad input.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Solve(SolveError::InvalidInput(_)) => 2,
            CliError::Solve(_) => 1,
            _ => 2,
        }
    }
}
