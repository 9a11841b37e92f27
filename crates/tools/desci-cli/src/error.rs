use desci_ledger::LedgerError;
use desci_types::TypesError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON Serialization/Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ledger Error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Generic Error: {0}")]
    Any(#[from] anyhow::Error), // Catch-all for config and other anyhow errors
}

impl From<TypesError> for CliError {
    fn from(e: TypesError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}

// Define the standard Result type alias
pub type CliResult<T = ()> = Result<T, CliError>;
