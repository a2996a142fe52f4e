//! Error types for SpendSense

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(f64),

    #[error("Experience level must be between 1 and 4, got {0}")]
    InvalidExperienceLevel(u8),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
}

pub type Result<T> = std::result::Result<T, Error>;
