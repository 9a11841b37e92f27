use super::print_records;
use crate::context::CliContext;
use crate::error::{CliError, CliResult};
use desci_ledger::NetworkStats;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

pub fn handle_search(ctx: &CliContext, query: &str) -> CliResult<()> {
    print_records(&ctx.ledger.search(query)?);
    Ok(())
}

pub fn handle_recent(ctx: &CliContext, limit: Option<usize>) -> CliResult<()> {
    let limit = limit.unwrap_or(ctx.config.display.recent_limit);
    print_records(&ctx.ledger.recent(limit)?);
    Ok(())
}

pub fn handle_by_submitter(ctx: &CliContext, submitter: &str) -> CliResult<()> {
    print_records(&ctx.ledger.by_submitter(submitter)?);
    Ok(())
}

pub fn handle_show(ctx: &CliContext, tx_prefix: &str) -> CliResult<()> {
    // Accept the truncated form printed by listings
    let prefix = tx_prefix.trim_end_matches("...");
    let record = ctx
        .ledger
        .find_by_tx_prefix(prefix)?
        .ok_or_else(|| CliError::NotFound(format!("no transaction starts with {}", prefix)))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub fn handle_export(ctx: &CliContext, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let count = ctx.ledger.export_jsonl(BufWriter::new(File::create(path)?))?;
            println!("Exported {} records to {}", count, path.display());
        }
        None => {
            ctx.ledger.export_jsonl(io::stdout().lock())?;
        }
    }
    Ok(())
}

pub fn handle_stats(ctx: &CliContext) -> CliResult<()> {
    let stats = NetworkStats::collect(&ctx.registry, &ctx.ledger)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
