//! Shared helpers for the ledger integration tests.

use desci_ledger::{AnchorMetadata, AnchorRecord, ProvenanceLedger};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Anchors `content` with an empty metadata map.
pub fn anchor_text(ledger: &ProvenanceLedger, content: &str, submitter: &str, data_type: &str) -> AnchorRecord {
    ledger
        .anchor(content.as_bytes(), submitter, data_type, AnchorMetadata::new())
        .expect("anchor should succeed")
}
