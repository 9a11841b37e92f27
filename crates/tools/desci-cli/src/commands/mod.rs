pub mod anchor;
pub mod nodes;
pub mod query;

// Re-export handlers for lib.rs
pub use anchor::{handle_anchor, handle_verify};
pub use nodes::handle_nodes_command;
pub use query::{handle_by_submitter, handle_export, handle_recent, handle_search, handle_show, handle_stats};

use desci_types::AnchorRecord;

/// One line per record: short id, block, submitter, data type, hash.
pub(crate) fn print_records(records: &[AnchorRecord]) {
    if records.is_empty() {
        println!("No transactions found.");
        return;
    }
    for record in records {
        println!(
            "{}  #{}  {:<12}  {:<22}  {}",
            record.transaction_id.short(),
            record.block_number,
            record.submitter,
            record.data_type,
            record.content_hash
        );
    }
}
