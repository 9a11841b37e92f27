use desci_types::DEFAULT_GENESIS_BLOCK;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DESCI_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LEDGER_FILE_NAME: &str = "ledger.jsonl";
pub const NODES_FILE_NAME: &str = "nodes.jsonl";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DesciConfig {
    pub ledger: LedgerConfig,
    pub nodes: NodesConfig,
    pub display: DisplayConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Where the CLI keeps the ledger between runs. Relative paths resolve against the data directory.
    pub data_path: Option<PathBuf>,
    /// Block number given to the first anchor.
    pub genesis_block: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            genesis_block: DEFAULT_GENESIS_BLOCK,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NodesConfig {
    /// Where the CLI keeps the node registry. Relative paths resolve against the data directory.
    pub data_path: Option<PathBuf>,
    /// Start from the demo stations when no registry file exists yet.
    pub seed_demo_nodes: bool,
}

impl Default for NodesConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            seed_demo_nodes: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default row count for "recent" listings.
    pub recent_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { recent_limit: 10 }
    }
}

impl DesciConfig {
    /// Resolves the ledger file location against `data_dir`.
    pub fn ledger_path(&self, data_dir: &Path) -> PathBuf {
        resolve(self.ledger.data_path.as_deref(), data_dir, LEDGER_FILE_NAME)
    }

    /// Resolves the node registry file location against `data_dir`.
    pub fn nodes_path(&self, data_dir: &Path) -> PathBuf {
        resolve(self.nodes.data_path.as_deref(), data_dir, NODES_FILE_NAME)
    }
}

fn resolve(configured: Option<&Path>, data_dir: &Path, default_name: &str) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => data_dir.join(path),
        None => data_dir.join(default_name),
    }
}

/// Returns ~/.desci by default, respecting $DESCI_DATA_DIR override.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".desci"))
        .ok_or_else(|| anyhow::anyhow!("Failed to find home directory"))
}

pub fn parse_config(content: &str) -> anyhow::Result<DesciConfig> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))
}

pub fn load_config(path: &Path) -> anyhow::Result<DesciConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file from {}: {}", path.display(), e))?;
    parse_config(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
}

/// Loads the explicit config file if one is given, otherwise `<data_dir>/config.toml`
/// when it exists, otherwise the defaults.
pub fn load_or_default(explicit: Option<&Path>, data_dir: &Path) -> anyhow::Result<DesciConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let default_path = data_dir.join(CONFIG_FILE_NAME);
    if default_path.exists() {
        load_config(&default_path)
    } else {
        Ok(DesciConfig::default())
    }
}
