use crate::error::TypesError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Pending,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Active => f.pad("active"),
            NodeStatus::Pending => f.pad("pending"),
        }
    }
}

impl FromStr for NodeStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(NodeStatus::Active),
            "pending" => Ok(NodeStatus::Pending),
            other => Err(TypesError::InvalidNodeStatus(other.to_string())),
        }
    }
}

/// A research station that submits data to the ledger.
///
/// The ledger only sees its `id` as an anchor's submitter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResearchNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub location: String,
    pub status: NodeStatus,
    pub last_submission: DateTime<Utc>,
    pub data_points: u64,
    pub verified: bool,
    /// `0x` followed by 40 hex characters.
    pub node_address: String,
}

impl ResearchNode {
    pub fn is_active(&self) -> bool {
        self.status == NodeStatus::Active
    }
}

/// Generates a random 160-bit address for a newly registered node.
pub fn random_node_address() -> String {
    format!("0x{}", hex::encode(rand::random::<[u8; 20]>()))
}
