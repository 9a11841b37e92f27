use desci_integration_tests::init_logging;
use desci_ledger::{AnchorMetadata, ProvenanceLedger};
use std::collections::HashSet;
use std::sync::Arc;

const WRITERS: usize = 8;
const PER_WRITER: usize = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_serialized() {
    init_logging();
    let ledger = Arc::new(ProvenanceLedger::new());

    let mut handles = Vec::new();
    for w in 0..WRITERS {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::task::spawn_blocking(move || {
            let submitter = format!("NODE-{:03}", w);
            for i in 0..PER_WRITER {
                ledger
                    .anchor(format!("{}-{}", w, i).as_bytes(), &submitter, "Telemetry Data", AnchorMetadata::new())
                    .expect("anchor");
            }
        }));
    }
    for handle in handles {
        handle.await.expect("writer task panicked");
    }

    // Snapshot after every writer has joined
    let records = ledger.records().unwrap();
    assert_eq!(records.len(), WRITERS * PER_WRITER);

    let ids: HashSet<_> = records.iter().map(|r| r.transaction_id).collect();
    assert_eq!(ids.len(), records.len());

    // Block numbers follow insertion order without gaps
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.block_number, ledger.genesis_block() + i as u64);
    }

    // Each writer's own records keep their submission order
    for w in 0..WRITERS {
        let mine = ledger.by_submitter(&format!("NODE-{:03}", w)).unwrap();
        assert_eq!(mine.len(), PER_WRITER);
        for (i, record) in mine.iter().enumerate() {
            let expected = ledger.verify(format!("{}-{}", w, i).as_bytes()).unwrap();
            assert_eq!(expected.as_ref(), Some(record));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_records_during_appends() {
    let ledger = Arc::new(ProvenanceLedger::new());

    let writer = {
        let ledger = Arc::clone(&ledger);
        tokio::task::spawn_blocking(move || {
            for i in 0..200 {
                ledger
                    .anchor(format!("sample-{}", i).as_bytes(), "NODE-001", "eDNA Sample", AnchorMetadata::new())
                    .expect("anchor");
            }
        })
    };
    let reader = {
        let ledger = Arc::clone(&ledger);
        tokio::task::spawn_blocking(move || {
            let mut last_len = 0;
            for _ in 0..200 {
                let snapshot = ledger.recent(usize::MAX).expect("recent");
                // Never shrinks, and every record is complete
                assert!(snapshot.len() >= last_len);
                assert!(snapshot.iter().all(|r| r.submitter == "NODE-001"));
                last_len = snapshot.len();
            }
        })
    };

    writer.await.expect("writer task panicked");
    reader.await.expect("reader task panicked");
    assert_eq!(ledger.len().unwrap(), 200);
}
