use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading the order items table
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid order_purchase_timestamp '{value}'")]
    InvalidTimestamp { line: u64, value: String },

    #[error("line {line}: price must be a finite non-negative number, got {price}")]
    InvalidPrice { line: u64, price: f64 },
}
