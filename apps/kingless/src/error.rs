//! Application-level error type.
//!
//! Domain and engine errors stay in their own types; this is the surface
//! the binaries report from `main`.

use thiserror::Error;

use crate::domain::DomainError;
use crate::engine::EngineError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("game error: {0}")]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("game log error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
