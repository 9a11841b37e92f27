use crate::hash::ContentHash;
use crate::id::TransactionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Block height assigned to the first anchor of an empty ledger.
pub const DEFAULT_GENESIS_BLOCK: u64 = 1_000_000;

/// Auxiliary descriptive fields attached to an anchor (filename, size, location, notes).
pub type AnchorMetadata = BTreeMap<String, String>;

/// Confirmation state of an anchor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnchorStatus {
    Pending,
    Confirmed,
}

impl fmt::Display for AnchorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorStatus::Pending => f.pad("pending"),
            AnchorStatus::Confirmed => f.pad("confirmed"),
        }
    }
}

/// One unit of data anchored to the ledger. Never mutated after insertion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnchorRecord {
    /// Unique identifier generated at insertion time.
    pub transaction_id: TransactionId,
    /// SHA-256 of the submitted bytes. Not unique: the same content may be anchored twice.
    pub content_hash: ContentHash,
    /// Originating actor (a research node id or user identifier).
    pub submitter: String,
    /// Free-form category label, e.g. "eDNA Sample".
    pub data_type: String,
    #[serde(default)]
    pub metadata: AnchorMetadata,
    pub created_at: DateTime<Utc>,
    pub status: AnchorStatus,
    /// Simulated block height; strictly increasing in insertion order.
    pub block_number: u64,
}

/// A request to anchor content, as submitted by an external collaborator.
///
/// `content` is optional so that a request deserialized with a `null` or
/// missing payload can be rejected explicitly instead of hashing nothing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorRequest {
    #[serde(default)]
    pub content: Option<Vec<u8>>,
    pub submitter: String,
    pub data_type: String,
    #[serde(default)]
    pub metadata: AnchorMetadata,
}

impl AnchorRequest {
    pub fn new(content: impl Into<Vec<u8>>, submitter: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            submitter: submitter.into(),
            data_type: data_type.into(),
            metadata: AnchorMetadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
