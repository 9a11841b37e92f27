//! desci-types
//! Defines the data structures shared across the De-Science ledger workspace.

pub mod anchor;
pub mod error;
pub mod hash;
pub mod id;
pub mod node;

// Re-export core types for easier access
pub use anchor::{AnchorMetadata, AnchorRecord, AnchorRequest, AnchorStatus, DEFAULT_GENESIS_BLOCK};
pub use error::TypesError;
pub use hash::ContentHash;
pub use id::TransactionId;
pub use node::{random_node_address, NodeStatus, ResearchNode};
