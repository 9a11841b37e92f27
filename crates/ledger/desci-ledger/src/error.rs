use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed input to an operation, e.g. a request without content.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ledger lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Node already registered: {0}")]
    DuplicateNode(String),

    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON Serialization/Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt data at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
