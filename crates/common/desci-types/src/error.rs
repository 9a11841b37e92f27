use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    #[error("Invalid transaction id: {0}")]
    InvalidTransactionId(String),

    #[error("Invalid node status: {0}")]
    InvalidNodeStatus(String),
}
