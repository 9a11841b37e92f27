use crate::context::CliContext;
use crate::error::CliResult;
use clap::Subcommand;
use desci_ledger::NodeFilter;
use desci_types::{NodeStatus, ResearchNode};

#[derive(Subcommand, Debug, Clone)]
pub enum NodesCmd {
    /// List research nodes, optionally filtered
    List {
        /// active or pending
        #[clap(long)]
        status: Option<String>,

        #[clap(long = "type")]
        node_type: Option<String>,

        /// Case-insensitive match on name or location
        #[clap(long)]
        search: Option<String>,
    },

    /// Register a new research node
    Add {
        #[clap(long)]
        name: String,

        #[clap(long = "type")]
        node_type: String,

        #[clap(long)]
        location: String,
    },
}

pub fn handle_nodes_command(ctx: &CliContext, cmd: &NodesCmd) -> CliResult<()> {
    match cmd {
        NodesCmd::List {
            status,
            node_type,
            search,
        } => {
            let filter = NodeFilter {
                status: status.as_deref().map(str::parse::<NodeStatus>).transpose()?,
                node_type: node_type.clone(),
                search: search.clone().filter(|s| !s.is_empty()),
            };
            let nodes = ctx.registry.filter(&filter)?;
            if nodes.is_empty() {
                println!("No research nodes match.");
            }
            for node in &nodes {
                print_node(node);
            }
        }
        NodesCmd::Add {
            name,
            node_type,
            location,
        } => {
            let node = ctx.registry.register_generated(name, node_type, location)?;
            ctx.persist_nodes()?;
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
    }
    Ok(())
}

fn print_node(node: &ResearchNode) {
    println!(
        "{:<9} {:<32} {:<22} {:<22} {:<8} {:>6} {}",
        node.id,
        node.name,
        node.node_type,
        node.location,
        node.status,
        node.data_points,
        if node.verified { "✅" } else { "❌" }
    );
}
