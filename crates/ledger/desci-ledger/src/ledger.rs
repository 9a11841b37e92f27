use crate::error::{LedgerError, LedgerResult};
use chrono::Utc;
use desci_types::{
    AnchorMetadata, AnchorRecord, AnchorRequest, AnchorStatus, ContentHash, TransactionId, DEFAULT_GENESIS_BLOCK,
};
use log::debug;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Records plus the lookup indexes kept alongside them.
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    records: Vec<AnchorRecord>,
    /// Content hash -> position of the earliest record carrying it.
    first_by_hash: HashMap<ContentHash, usize>,
    /// Transaction id -> position.
    by_tx: HashMap<TransactionId, usize>,
}

impl LedgerState {
    pub(crate) fn contains_tx(&self, id: &TransactionId) -> bool {
        self.by_tx.contains_key(id)
    }

    pub(crate) fn records(&self) -> &[AnchorRecord] {
        &self.records
    }

    pub(crate) fn push(&mut self, record: AnchorRecord) {
        let index = self.records.len();
        self.first_by_hash.entry(record.content_hash).or_insert(index);
        self.by_tx.insert(record.transaction_id, index);
        self.records.push(record);
    }

    fn fresh_transaction_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::random();
            if !self.by_tx.contains_key(&id) {
                return id;
            }
        }
    }

    fn next_block(&self, genesis_block: u64) -> u64 {
        self.records
            .last()
            .map_or(genesis_block, |last| last.block_number + 1)
    }
}

/// Append-only, in-memory ledger of anchored content hashes.
///
/// All operations take `&self`; appends are serialized by a single
/// `RwLock`, so the ledger can be shared across threads behind an `Arc`.
/// Readers always see whole records.
#[derive(Debug)]
pub struct ProvenanceLedger {
    genesis_block: u64,
    state: RwLock<LedgerState>,
}

impl Default for ProvenanceLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvenanceLedger {
    /// Creates an empty ledger starting at [`DEFAULT_GENESIS_BLOCK`].
    pub fn new() -> Self {
        Self::with_genesis_block(DEFAULT_GENESIS_BLOCK)
    }

    pub fn with_genesis_block(genesis_block: u64) -> Self {
        Self::from_state(genesis_block, LedgerState::default())
    }

    pub(crate) fn from_state(genesis_block: u64, state: LedgerState) -> Self {
        Self {
            genesis_block,
            state: RwLock::new(state),
        }
    }

    pub fn genesis_block(&self) -> u64 {
        self.genesis_block
    }

    pub(crate) fn read(&self) -> LedgerResult<RwLockReadGuard<'_, LedgerState>> {
        self.state.read().map_err(|e| LedgerError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, LedgerState>> {
        self.state.write().map_err(|e| LedgerError::LockPoisoned(e.to_string()))
    }

    /// Hashes `content` and appends a confirmed record for it.
    ///
    /// Anchoring the same bytes twice is allowed and yields two records with
    /// distinct transaction ids and the same content hash.
    pub fn anchor(
        &self,
        content: &[u8],
        submitter: &str,
        data_type: &str,
        metadata: AnchorMetadata,
    ) -> LedgerResult<AnchorRecord> {
        let content_hash = ContentHash::digest(content);

        let mut state = self.write()?;
        let record = AnchorRecord {
            transaction_id: state.fresh_transaction_id(),
            content_hash,
            submitter: submitter.to_string(),
            data_type: data_type.to_string(),
            metadata,
            created_at: Utc::now(),
            status: AnchorStatus::Confirmed,
            block_number: state.next_block(self.genesis_block),
        };
        state.push(record.clone());
        drop(state);

        debug!(
            "Anchored {} for {} at block {} ({})",
            record.content_hash,
            record.submitter,
            record.block_number,
            record.transaction_id.short()
        );
        Ok(record)
    }

    /// Anchors a collaborator-supplied request. A request without content is rejected.
    pub fn anchor_request(&self, request: AnchorRequest) -> LedgerResult<AnchorRecord> {
        let content = request
            .content
            .ok_or_else(|| LedgerError::InvalidInput("content must not be null".to_string()))?;
        self.anchor(&content, &request.submitter, &request.data_type, request.metadata)
    }

    /// Returns the earliest record whose content hash matches `content`, if any.
    pub fn verify(&self, content: &[u8]) -> LedgerResult<Option<AnchorRecord>> {
        self.verify_hash(&ContentHash::digest(content))
    }

    /// Same as [`ProvenanceLedger::verify`] for an already computed digest.
    pub fn verify_hash(&self, hash: &ContentHash) -> LedgerResult<Option<AnchorRecord>> {
        let state = self.read()?;
        Ok(state.first_by_hash.get(hash).map(|&i| state.records[i].clone()))
    }

    /// Case-insensitive substring search over transaction id, content hash and submitter.
    ///
    /// Results are in ledger order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> LedgerResult<Vec<AnchorRecord>> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .filter(|r| record_matches(r, &needle))
            .cloned()
            .collect())
    }

    /// The last `n` records, most recent first.
    pub fn recent(&self, n: usize) -> LedgerResult<Vec<AnchorRecord>> {
        let state = self.read()?;
        Ok(state.records.iter().rev().take(n).cloned().collect())
    }

    /// All records whose submitter equals `submitter` exactly, in ledger order.
    pub fn by_submitter(&self, submitter: &str) -> LedgerResult<Vec<AnchorRecord>> {
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .filter(|r| r.submitter == submitter)
            .cloned()
            .collect())
    }

    pub fn get(&self, id: &TransactionId) -> LedgerResult<Option<AnchorRecord>> {
        let state = self.read()?;
        Ok(state.by_tx.get(id).map(|&i| state.records[i].clone()))
    }

    /// First record (ledger order) whose transaction id starts with `prefix`, ignoring case.
    pub fn find_by_tx_prefix(&self, prefix: &str) -> LedgerResult<Option<AnchorRecord>> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Ok(None);
        }
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .find(|r| r.transaction_id.to_string().starts_with(&prefix))
            .cloned())
    }

    /// Full snapshot in insertion order.
    pub fn records(&self) -> LedgerResult<Vec<AnchorRecord>> {
        Ok(self.read()?.records.clone())
    }

    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.read()?.records.is_empty())
    }

    /// Block number of the most recent record, `None` on an empty ledger.
    pub fn latest_block(&self) -> LedgerResult<Option<u64>> {
        Ok(self.read()?.records.last().map(|r| r.block_number))
    }
}

fn record_matches(record: &AnchorRecord, needle: &str) -> bool {
    // Ids and hashes render as lowercase hex already.
    record.transaction_id.to_string().contains(needle)
        || record.content_hash.to_hex().contains(needle)
        || record.submitter.to_lowercase().contains(needle)
}
