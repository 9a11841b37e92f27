use desci_integration_tests::{anchor_text, init_logging};
use desci_ledger::{
    AnchorRequest, AnchorStatus, ContentHash, LedgerError, NetworkStats, NodeFilter, NodeRegistry, NodeStatus,
    ProvenanceLedger,
};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[test]
fn test_dashboard_anchor_and_verify_flow() {
    init_logging();
    let ledger = ProvenanceLedger::new();

    // 1. Anchor "hello" from NODE-001
    let first = anchor_text(&ledger, "hello", "NODE-001", "eDNA Sample");
    assert_eq!(first.content_hash.to_string(), HELLO_SHA256);
    assert_eq!(first.submitter, "NODE-001");
    assert_eq!(first.status, AnchorStatus::Confirmed);

    // 2. Verify finds it
    assert_eq!(ledger.verify(b"hello").unwrap(), Some(first.clone()));

    // 3. Unknown content is not found
    assert_eq!(ledger.verify(b"goodbye").unwrap(), None);

    // 4. Duplicate content from NODE-002 is permitted
    let second = anchor_text(&ledger, "hello", "NODE-002", "eDNA Sample");
    assert_eq!(second.content_hash, first.content_hash);
    assert_ne!(second.transaction_id, first.transaction_id);
    assert_eq!(ledger.verify(b"hello").unwrap(), Some(first.clone()));

    // 5. Most recent first
    assert_eq!(ledger.recent(1).unwrap(), vec![second.clone()]);

    // 6. Search by submitter
    let found = ledger.search("NODE-001").unwrap();
    assert_eq!(found.len(), 1);
    assert!(found.iter().all(|r| r.submitter == "NODE-001"));

    assert_eq!(ledger.records().unwrap(), vec![first, second]);
}

#[test]
fn test_round_trip_for_assorted_payloads() {
    let ledger = ProvenanceLedger::new();
    let payloads: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"{\"temperature\": 25.5, \"humidity\": 60}".to_vec(),
        (0..=255u8).collect(),
        vec![0u8; 4096],
    ];

    for (i, payload) in payloads.iter().enumerate() {
        let submitter = format!("NODE-00{}", i + 1);
        let record = ledger
            .anchor(payload, &submitter, "Sensor Calibration", Default::default())
            .unwrap();
        let verified = ledger.verify(payload).unwrap().expect("anchored payload verifies");
        assert_eq!(verified.content_hash, ContentHash::digest(payload));
        assert_eq!(verified.submitter, submitter);
        assert_eq!(verified, record);
    }
}

#[test]
fn test_request_from_json_collaborator() {
    let ledger = ProvenanceLedger::new();

    let ok: AnchorRequest = serde_json::from_str(
        r#"{"content": [104, 101, 108, 108, 111], "submitter": "NODE-003", "data_type": "Marine eDNA",
            "metadata": {"filename": "reef.fastq"}}"#,
    )
    .unwrap();
    let record = ledger.anchor_request(ok).unwrap();
    assert_eq!(record.content_hash.to_string(), HELLO_SHA256);
    assert_eq!(record.metadata["filename"], "reef.fastq");

    let null: AnchorRequest =
        serde_json::from_str(r#"{"content": null, "submitter": "NODE-003", "data_type": "Marine eDNA"}"#).unwrap();
    match ledger.anchor_request(null) {
        Err(LedgerError::InvalidInput(msg)) => assert!(msg.contains("content")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert_eq!(ledger.len().unwrap(), 1);
}

#[test]
fn test_registry_nodes_feed_the_ledger() {
    let registry = NodeRegistry::with_demo_nodes();
    let ledger = ProvenanceLedger::new();

    let active = registry
        .filter(&NodeFilter {
            status: Some(NodeStatus::Active),
            ..Default::default()
        })
        .unwrap();
    for node in &active {
        anchor_text(&ledger, &format!("reading from {}", node.name), &node.id, &node.node_type);
    }

    for node in &active {
        let records = ledger.by_submitter(&node.id).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data_type, node.node_type);
    }
    assert!(ledger.by_submitter("NODE-004").unwrap().is_empty());

    let stats = NetworkStats::collect(&registry, &ledger).unwrap();
    assert_eq!(stats.active_nodes, active.len());
    assert_eq!(stats.total_transactions, active.len());
}
