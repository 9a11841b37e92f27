//! desci-cli: anchor, verify and browse the provenance ledger from a terminal.

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;

// Re-export key types
pub use cli::{Cli, Commands, GlobalOpts};
pub use context::CliContext;
pub use error::{CliError, CliResult};

/// Installs `env_logger`. `-v` raises the default level to debug; `RUST_LOG` still wins.
pub fn init_logging(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // Ignore error if logger is already initialized
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Main library entry point.
pub fn run(cli: Cli) -> CliResult<()> {
    let ctx = CliContext::new(&cli.global_opts)?;

    match cli.command {
        Commands::Anchor(args) => commands::handle_anchor(&ctx, &args)?,
        Commands::Verify { file } => commands::handle_verify(&ctx, &file)?,
        Commands::Search { query } => commands::handle_search(&ctx, &query)?,
        Commands::Recent { limit } => commands::handle_recent(&ctx, limit)?,
        Commands::BySubmitter { submitter } => commands::handle_by_submitter(&ctx, &submitter)?,
        Commands::Show { tx_prefix } => commands::handle_show(&ctx, &tx_prefix)?,
        Commands::Export { output } => commands::handle_export(&ctx, output.as_deref())?,
        Commands::Stats => commands::handle_stats(&ctx)?,
        Commands::Nodes(cmd) => commands::handle_nodes_command(&ctx, &cmd)?,
    }

    Ok(())
}
