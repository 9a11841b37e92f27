use desci_config::{load_or_default, CONFIG_FILE_NAME};
use desci_integration_tests::{anchor_text, init_logging};
use desci_ledger::{AnchorMetadata, LedgerError, ProvenanceLedger};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_reopen_and_continue() -> anyhow::Result<()> {
    init_logging();
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join(CONFIG_FILE_NAME), "[ledger]\ngenesis_block = 500\n")?;

    let config = load_or_default(None, tmp.path())?;
    let path = config.ledger_path(tmp.path());

    let ledger = ProvenanceLedger::open_path(&path, config.ledger.genesis_block)?;
    let mut metadata = AnchorMetadata::new();
    metadata.insert("filename".to_string(), "svalbard.csv".to_string());
    metadata.insert("notes".to_string(), "winter series".to_string());
    let first = ledger.anchor(b"arctic", "NODE-004", "Environmental Reading", metadata)?;
    let second = anchor_text(&ledger, "rover", "NODE-002", "Telemetry Data");
    ledger.save_to_path(&path)?;

    let reopened = ProvenanceLedger::open_path(&path, config.ledger.genesis_block)?;
    assert_eq!(reopened.records()?, vec![first.clone(), second]);
    assert_eq!(reopened.verify(b"arctic")?, Some(first));

    let third = anchor_text(&reopened, "reef", "NODE-003", "Marine eDNA");
    assert_eq!(third.block_number, 502);
    Ok(())
}

#[test]
fn test_truncated_file_is_reported() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("ledger.jsonl");

    let ledger = ProvenanceLedger::new();
    anchor_text(&ledger, "one", "NODE-001", "eDNA Sample");
    anchor_text(&ledger, "two", "NODE-001", "eDNA Sample");
    ledger.save_to_path(&path)?;

    let content = fs::read_to_string(&path)?;
    fs::write(&path, &content[..content.len() - 20])?;

    match ProvenanceLedger::open_path(&path, ledger.genesis_block()) {
        Err(LedgerError::Corrupt { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected Corrupt, got {:?}", other.map(|l| l.len())),
    }
    Ok(())
}
