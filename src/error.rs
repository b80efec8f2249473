use crate::domain::bills::Denomination;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Bill count overflow for {denomination} bills")]
    CountOverflow { denomination: Denomination },
    #[error("Till holds {actual} dollars but {expected} were expected")]
    BalanceMismatch { expected: u64, actual: u64 },
}

pub type Result<T> = std::result::Result<T, TillError>;
