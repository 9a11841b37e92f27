use crate::commands::anchor::AnchorArgs;
use crate::commands::nodes::NodesCmd;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "De-Science provenance ledger", long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub global_opts: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub struct GlobalOpts {
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file (defaults to <data dir>/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (defaults to $DESCI_DATA_DIR or ~/.desci)
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Anchor a file's content hash to the ledger
    Anchor(AnchorArgs),

    /// Check whether a file's content has been anchored
    Verify {
        #[clap(short, long)]
        file: PathBuf,
    },

    /// Search transaction ids, content hashes and submitters
    Search { query: String },

    /// Show the most recent anchors, newest first
    Recent {
        /// Number of records (defaults to display.recent_limit)
        #[clap(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List anchors from one submitter
    #[clap(name = "by-submitter")]
    BySubmitter { submitter: String },

    /// Show one transaction by id or id prefix
    Show { tx_prefix: String },

    /// Export the ledger as JSON lines
    Export {
        /// Output file (defaults to stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Network overview figures
    Stats,

    /// Research node commands
    #[clap(subcommand)]
    Nodes(NodesCmd),
}
