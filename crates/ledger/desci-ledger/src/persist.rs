//! JSON-lines export and import.
//!
//! Each line holds one [`AnchorRecord`] (or one [`ResearchNode`] for the
//! registry file) as a JSON object, in insertion order.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{LedgerState, ProvenanceLedger};
use crate::registry::NodeRegistry;
use desci_types::{AnchorRecord, ResearchNode};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

impl ProvenanceLedger {
    /// Writes every record to `writer`, one JSON object per line. Returns the record count.
    pub fn export_jsonl<W: Write>(&self, mut writer: W) -> LedgerResult<usize> {
        let state = self.read()?;
        write_lines(&mut writer, state.records())?;
        Ok(state.records().len())
    }

    /// Rebuilds a ledger from JSON lines produced by [`ProvenanceLedger::export_jsonl`].
    ///
    /// Blank lines are skipped. A line that does not parse, or that repeats a
    /// transaction id, fails the whole load.
    pub fn load_jsonl<R: BufRead>(reader: R, genesis_block: u64) -> LedgerResult<Self> {
        let mut state = LedgerState::default();
        read_lines(reader, |line_no, record: AnchorRecord| {
            if state.contains_tx(&record.transaction_id) {
                return Err(LedgerError::Corrupt {
                    line: line_no,
                    reason: format!("duplicate transaction id {}", record.transaction_id),
                });
            }
            state.push(record);
            Ok(())
        })?;
        debug!("Loaded {} anchor records", state.records().len());
        Ok(Self::from_state(genesis_block, state))
    }

    /// Opens the ledger stored at `path`. A missing file yields an empty ledger.
    pub fn open_path(path: &Path, genesis_block: u64) -> LedgerResult<Self> {
        if !path.exists() {
            debug!("No ledger at {}, starting empty", path.display());
            return Ok(Self::with_genesis_block(genesis_block));
        }
        let file = File::open(path)?;
        Self::load_jsonl(BufReader::new(file), genesis_block)
    }

    /// Writes the ledger to `path`, creating parent directories as needed.
    ///
    /// The file is written next to its destination and renamed into place.
    pub fn save_to_path(&self, path: &Path) -> LedgerResult<usize> {
        let count = replace_file(path, |w| self.export_jsonl(w))?;
        debug!("Saved {} anchor records to {}", count, path.display());
        Ok(count)
    }
}

impl NodeRegistry {
    /// Writes every node to `writer`, one JSON object per line. Returns the node count.
    pub fn export_jsonl<W: Write>(&self, mut writer: W) -> LedgerResult<usize> {
        let nodes = self.nodes()?;
        write_lines(&mut writer, &nodes)?;
        Ok(nodes.len())
    }

    /// Rebuilds a registry from JSON lines. A repeated node id fails the load.
    pub fn load_jsonl<R: BufRead>(reader: R) -> LedgerResult<Self> {
        let mut nodes: Vec<ResearchNode> = Vec::new();
        read_lines(reader, |line_no, node: ResearchNode| {
            if nodes.iter().any(|n| n.id == node.id) {
                return Err(LedgerError::Corrupt {
                    line: line_no,
                    reason: format!("duplicate node id {}", node.id),
                });
            }
            nodes.push(node);
            Ok(())
        })?;
        debug!("Loaded {} research nodes", nodes.len());
        Ok(Self::from_nodes(nodes))
    }

    /// Opens the registry stored at `path`. A missing file yields the demo
    /// stations when `seed_demo_nodes` is set, an empty registry otherwise.
    pub fn open_path(path: &Path, seed_demo_nodes: bool) -> LedgerResult<Self> {
        if !path.exists() {
            debug!("No node registry at {}, seeding demo nodes: {}", path.display(), seed_demo_nodes);
            return Ok(if seed_demo_nodes {
                Self::with_demo_nodes()
            } else {
                Self::new()
            });
        }
        let file = File::open(path)?;
        Self::load_jsonl(BufReader::new(file))
    }

    pub fn save_to_path(&self, path: &Path) -> LedgerResult<usize> {
        let count = replace_file(path, |w| self.export_jsonl(w))?;
        debug!("Saved {} research nodes to {}", count, path.display());
        Ok(count)
    }
}

fn write_lines<W: Write, T: Serialize>(writer: &mut W, items: &[T]) -> LedgerResult<()> {
    for item in items {
        serde_json::to_writer(&mut *writer, item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Parses each non-blank line as `T` and hands it to `accept` with its 1-based line number.
fn read_lines<R, T, F>(reader: R, mut accept: F) -> LedgerResult<()>
where
    R: BufRead,
    T: DeserializeOwned,
    F: FnMut(usize, T) -> LedgerResult<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|e| LedgerError::Corrupt {
            line: line_no,
            reason: e.to_string(),
        })?;
        accept(line_no, item)?;
    }
    Ok(())
}

/// Writes `path` through a sibling temp file renamed into place, creating parent directories.
fn replace_file<F>(path: &Path, write: F) -> LedgerResult<usize>
where
    F: FnOnce(BufWriter<File>) -> LedgerResult<usize>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    let count = write(BufWriter::new(File::create(&tmp_path)?))?;
    fs::rename(&tmp_path, path)?;
    Ok(count)
}
