use crate::context::CliContext;
use crate::error::{CliError, CliResult};
use clap::Args;
use colored::Colorize;
use desci_types::AnchorMetadata;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct AnchorArgs {
    /// File whose content is anchored
    #[clap(short, long)]
    pub file: PathBuf,

    /// Submitting research node or user
    #[clap(short, long)]
    pub submitter: String,

    #[clap(short = 't', long, default_value = "eDNA Sample")]
    pub data_type: String,

    /// Extra metadata as key=value, repeatable
    #[clap(short, long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,
}

fn parse_meta(entry: &str) -> CliResult<(String, String)> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| CliError::InvalidArgument(format!("metadata must be KEY=VALUE, got '{}'", entry)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidArgument(format!("metadata key is empty in '{}'", entry)));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn read_content(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|e| CliError::InvalidArgument(format!("cannot read {}: {}", path.display(), e)))
}

pub fn handle_anchor(ctx: &CliContext, args: &AnchorArgs) -> CliResult<()> {
    let content = read_content(&args.file)?;

    let mut metadata = AnchorMetadata::new();
    if let Some(name) = args.file.file_name() {
        metadata.insert("filename".to_string(), name.to_string_lossy().into_owned());
    }
    metadata.insert("size".to_string(), content.len().to_string());
    for entry in &args.meta {
        let (key, value) = parse_meta(entry)?;
        metadata.insert(key, value);
    }

    let record = ctx.ledger.anchor(&content, &args.submitter, &args.data_type, metadata)?;
    ctx.persist()?;

    println!("{} Data anchored. Transaction: {}", "✓".green(), record.transaction_id.short());
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub fn handle_verify(ctx: &CliContext, file: &Path) -> CliResult<()> {
    let content = read_content(file)?;
    match ctx.ledger.verify(&content)? {
        Some(record) => {
            println!("{} Verified: content was anchored by {}", "✅".green(), record.submitter);
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        None => {
            println!("{} Not anchored: {}", "❌".red(), file.display());
            Err(CliError::NotFound(format!("no anchor matches {}", file.display())))
        }
    }
}
