use crate::cli::GlobalOpts;
use crate::error::CliResult;
use desci_config::DesciConfig;
use desci_ledger::{NodeRegistry, ProvenanceLedger};
use log::debug;
use std::path::PathBuf;

/// State shared by every command: configuration, the ledger and the node registry.
pub struct CliContext {
    pub config: DesciConfig,
    pub data_dir: PathBuf,
    pub ledger_path: PathBuf,
    pub ledger: ProvenanceLedger,
    pub nodes_path: PathBuf,
    pub registry: NodeRegistry,
}

impl CliContext {
    pub fn new(opts: &GlobalOpts) -> CliResult<Self> {
        let data_dir = match &opts.data_dir {
            Some(dir) => dir.clone(),
            None => desci_config::data_dir()?,
        };
        let config = desci_config::load_or_default(opts.config.as_deref(), &data_dir)?;
        let ledger_path = config.ledger_path(&data_dir);
        let ledger = ProvenanceLedger::open_path(&ledger_path, config.ledger.genesis_block)?;
        let nodes_path = config.nodes_path(&data_dir);
        let registry = NodeRegistry::open_path(&nodes_path, config.nodes.seed_demo_nodes)?;
        debug!(
            "Opened ledger at {} ({} records), nodes at {}",
            ledger_path.display(),
            ledger.len()?,
            nodes_path.display()
        );

        Ok(Self {
            config,
            data_dir,
            ledger_path,
            ledger,
            nodes_path,
            registry,
        })
    }

    /// Writes the ledger back to its data file.
    pub fn persist(&self) -> CliResult<()> {
        self.ledger.save_to_path(&self.ledger_path)?;
        Ok(())
    }

    /// Writes the node registry back to its data file.
    pub fn persist_nodes(&self) -> CliResult<()> {
        self.registry.save_to_path(&self.nodes_path)?;
        Ok(())
    }
}
