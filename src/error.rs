//! Error taxonomy for dataset loading, strategy dispatch and verification.

use std::path::PathBuf;

use thiserror::Error;

use crate::operation::Operation;
use crate::strategy::StrategyKind;

/// Crate-wide result alias
pub type Result<T, E = BenchError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read dataset {path}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} has no column named '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("row {row}: '{value}' in column '{column}' is not an integer")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("split fraction {0} is outside [0, 1]")]
    InvalidFraction(f64),

    #[error("failed to spawn {strategy} worker")]
    Spawn {
        strategy: StrategyKind,
        #[source]
        source: std::io::Error,
    },

    #[error("{strategy} worker panicked")]
    WorkerPanicked { strategy: StrategyKind },

    #[error("worker process exited with {status}: {stderr}")]
    WorkerFailed { status: String, stderr: String },

    #[error("transfer to worker process failed")]
    Transfer(#[from] TransferError),

    #[error("no {0} strategy registered")]
    MissingStrategy(StrategyKind),

    #[error("{strategy} {operation} output differs from sequential at index {index}")]
    Mismatch {
        strategy: StrategyKind,
        operation: Operation,
        index: usize,
    },
}

/// Failure moving data across the process boundary
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("pipe I/O failed")]
    Io(#[from] std::io::Error),

    #[error("malformed worker message")]
    Codec(#[from] serde_json::Error),

    #[error("worker {0} pipe was not captured")]
    MissingPipe(&'static str),
}
