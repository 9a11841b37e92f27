#![deny(unsafe_code)]
//! De-Science provenance ledger
//!
//! An in-process, append-only store of anchoring records keyed by content
//! hash, plus the research node registry and network statistics that the
//! dashboard collaborators read alongside it.

pub mod error;
pub mod ledger;
pub mod persist;
pub mod registry;
pub mod stats;

pub use error::{LedgerError, LedgerResult};
pub use ledger::ProvenanceLedger;
pub use registry::{demo_nodes, NodeFilter, NodeRegistry};
pub use stats::NetworkStats;

// Shared types
pub use desci_types::{
    AnchorMetadata, AnchorRecord, AnchorRequest, AnchorStatus, ContentHash, NodeStatus, ResearchNode,
    TransactionId, DEFAULT_GENESIS_BLOCK,
};
