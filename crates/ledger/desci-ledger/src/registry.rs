use crate::error::{LedgerError, LedgerResult};
use chrono::{DateTime, TimeZone, Utc};
use desci_types::{random_node_address, NodeStatus, ResearchNode};
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Attempts at a random `NODE-nnn` id before falling back to a sequential one.
const RANDOM_ID_ATTEMPTS: usize = 32;

/// Criteria for listing research nodes. Every criterion that is set must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    pub status: Option<NodeStatus>,
    /// Exact match on the node type.
    pub node_type: Option<String>,
    /// Case-insensitive substring of the node name or location.
    pub search: Option<String>,
}

impl NodeFilter {
    fn matches(&self, node: &ResearchNode) -> bool {
        self.status.map_or(true, |s| node.status == s)
            && self.node_type.as_ref().map_or(true, |t| &node.node_type == t)
            && self.search.as_ref().map_or(true, |q| {
                let q = q.to_lowercase();
                node.name.to_lowercase().contains(&q) || node.location.to_lowercase().contains(&q)
            })
    }
}

/// The set of research nodes known to the dashboard, in registration order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: RwLock<Vec<ResearchNode>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the four demo stations.
    pub fn with_demo_nodes() -> Self {
        Self::from_nodes(demo_nodes())
    }

    pub(crate) fn from_nodes(nodes: Vec<ResearchNode>) -> Self {
        Self {
            nodes: RwLock::new(nodes),
        }
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, Vec<ResearchNode>>> {
        self.nodes.read().map_err(|e| LedgerError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, Vec<ResearchNode>>> {
        self.nodes.write().map_err(|e| LedgerError::LockPoisoned(e.to_string()))
    }

    pub fn register(&self, node: ResearchNode) -> LedgerResult<()> {
        let mut nodes = self.write()?;
        if nodes.iter().any(|n| n.id == node.id) {
            return Err(LedgerError::DuplicateNode(node.id));
        }
        debug!("Registered research node {} ({})", node.id, node.name);
        nodes.push(node);
        Ok(())
    }

    /// Registers an active, verified node with a fresh id and address.
    pub fn register_generated(&self, name: &str, node_type: &str, location: &str) -> LedgerResult<ResearchNode> {
        if name.trim().is_empty() {
            return Err(LedgerError::InvalidInput("node name must not be empty".to_string()));
        }
        let mut nodes = self.write()?;
        let id = fresh_node_id(&nodes);
        let node = ResearchNode {
            id,
            name: name.to_string(),
            node_type: node_type.to_string(),
            location: location.to_string(),
            status: NodeStatus::Active,
            last_submission: Utc::now(),
            data_points: 0,
            verified: true,
            node_address: random_node_address(),
        };
        debug!("Registered research node {} ({})", node.id, node.name);
        nodes.push(node.clone());
        Ok(node)
    }

    pub fn get(&self, id: &str) -> LedgerResult<Option<ResearchNode>> {
        Ok(self.read()?.iter().find(|n| n.id == id).cloned())
    }

    pub fn nodes(&self) -> LedgerResult<Vec<ResearchNode>> {
        Ok(self.read()?.clone())
    }

    /// Distinct node types, sorted.
    pub fn node_types(&self) -> LedgerResult<Vec<String>> {
        let types: BTreeSet<String> = self.read()?.iter().map(|n| n.node_type.clone()).collect();
        Ok(types.into_iter().collect())
    }

    pub fn filter(&self, filter: &NodeFilter) -> LedgerResult<Vec<ResearchNode>> {
        Ok(self
            .read()?
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect())
    }
}

fn fresh_node_id(nodes: &[ResearchNode]) -> String {
    fn taken(nodes: &[ResearchNode], id: &str) -> bool {
        nodes.iter().any(|n| n.id == id)
    }

    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_ID_ATTEMPTS {
        let id = format!("NODE-{}", rng.gen_range(100..1000));
        if !taken(nodes, &id) {
            return id;
        }
    }
    // The three-digit space is crowded; continue past it sequentially.
    let mut n = 1000usize;
    loop {
        let id = format!("NODE-{}", n);
        if !taken(nodes, &id) {
            return id;
        }
        n += 1;
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap_or_default()
}

/// The stations the dashboard starts with.
pub fn demo_nodes() -> Vec<ResearchNode> {
    vec![
        ResearchNode {
            id: "NODE-001".to_string(),
            name: "Amazon Rainforest eDNA Station".to_string(),
            node_type: "eDNA Sensor".to_string(),
            location: "Manaus, Brazil".to_string(),
            status: NodeStatus::Active,
            last_submission: at(2024, 1, 15, 14, 30, 22),
            data_points: 1245,
            verified: true,
            node_address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
        },
        ResearchNode {
            id: "NODE-002".to_string(),
            name: "Mars Rover Telemetry".to_string(),
            node_type: "Space Telemetry".to_string(),
            location: "Jezero Crater, Mars".to_string(),
            status: NodeStatus::Active,
            last_submission: at(2024, 1, 15, 15, 45, 10),
            data_points: 3567,
            verified: true,
            node_address: "0x8aB4F35Cc6634C0532925a3b844Bc454e4438f77a".to_string(),
        },
        ResearchNode {
            id: "NODE-003".to_string(),
            name: "Pacific Ocean eDNA Array".to_string(),
            node_type: "Marine eDNA".to_string(),
            location: "Great Barrier Reef".to_string(),
            status: NodeStatus::Active,
            last_submission: at(2024, 1, 15, 13, 15, 33),
            data_points: 892,
            verified: true,
            node_address: "0x9cD4F25Cc6634C0532925a3b844Bc454e4438f88b".to_string(),
        },
        ResearchNode {
            id: "NODE-004".to_string(),
            name: "Arctic Climate Station".to_string(),
            node_type: "Environmental Sensor".to_string(),
            location: "Svalbard, Norway".to_string(),
            status: NodeStatus::Pending,
            last_submission: at(2024, 1, 14, 22, 10, 45),
            data_points: 456,
            verified: false,
            node_address: "0x3eF5A45Cc6634C0532925a3b844Bc454e4438f99c".to_string(),
        },
    ]
}
