//! File drop ingestion across the module boundary.

mod common;

use std::sync::Arc;

use bridge_traits::error::BridgeError;
use bridge_traits::files::{DroppedFile, MemoryFile};
use common::{ModuleCall, PanickingFile, RecordingModule, SlowFile, UnreadableFile};
use core_input::file_drop::FileDropIngestor;

const LIMIT: usize = 64 * 1024;

fn memory(name: &str, contents: &[u8]) -> Arc<dyn DroppedFile> {
    Arc::new(MemoryFile::new(name, contents.to_vec()))
}

#[tokio::test]
async fn test_two_files_one_empty() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    let report = ingestor
        .ingest(vec![memory("a.txt", b"hello"), memory("b.bin", b"")])
        .await;

    assert_eq!(report.transfers.len(), 2);
    assert!(report.failures.is_empty());

    let mut drops: Vec<_> = module
        .file_drops()
        .into_iter()
        .map(|(name, len, _)| (name, len))
        .collect();
    drops.sort();
    assert_eq!(
        drops,
        vec![("a.txt".to_string(), 5), ("b.bin".to_string(), 0)]
    );
}

#[tokio::test]
async fn test_bytes_copied_into_boundary_buffer() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    let report = ingestor.ingest(vec![memory("a.txt", b"hello")]).await;

    let transfer = &report.transfers[0];
    assert_eq!(transfer.index, 0);
    assert_eq!(transfer.length, 5);
    assert_eq!(module.buffer(transfer.buffer).unwrap(), b"hello".to_vec());
    assert!(module.calls().contains(&ModuleCall::Malloc(5)));
}

#[tokio::test]
async fn test_empty_file_gets_allocation_and_delivery() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    ingestor.ingest(vec![memory("empty", b"")]).await;

    let drops = module.file_drops();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].1, 0);
    assert!(!drops[0].2.is_null());
    assert!(module.calls().contains(&ModuleCall::Malloc(0)));
}

#[tokio::test]
async fn test_n_files_n_deliveries_regardless_of_completion_order() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    // Earlier files finish later.
    let files: Vec<Arc<dyn DroppedFile>> = vec![
        SlowFile::new("first", b"1111", 60),
        SlowFile::new("second", b"22", 30),
        SlowFile::new("third", b"3", 0),
    ];
    let report = ingestor.ingest(files).await;

    assert_eq!(report.total(), 3);
    let drops = module.file_drops();
    assert_eq!(drops.len(), 3);
    // Delivery follows read completion, not the drop event's order.
    let delivered: Vec<_> = drops.iter().map(|(name, _, _)| name.as_str()).collect();
    assert_eq!(delivered, vec!["third", "second", "first"]);

    let mut pairs: Vec<_> = drops.iter().map(|(n, l, _)| (n.clone(), *l)).collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("first".to_string(), 4),
            ("second".to_string(), 2),
            ("third".to_string(), 1)
        ]
    );

    // Indices still refer to the drop event's list.
    for transfer in &report.transfers {
        let expected = ["first", "second", "third"][transfer.index];
        assert_eq!(transfer.filename, expected);
    }
}

#[tokio::test]
async fn test_read_failure_isolated() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    let files: Vec<Arc<dyn DroppedFile>> = vec![
        memory("ok-1", b"abc"),
        Arc::new(UnreadableFile("broken".to_string())),
        memory("ok-2", b"de"),
    ];
    let report = ingestor.ingest(files).await;

    assert_eq!(report.transfers.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].filename, "broken");
    assert_eq!(report.failures[0].index, 1);
    assert!(matches!(report.failures[0].error, BridgeError::FileRead { .. }));
    assert_eq!(module.file_drops().len(), 2);
}

#[tokio::test]
async fn test_crashed_read_task_still_reported() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    let files: Vec<Arc<dyn DroppedFile>> = vec![
        memory("ok", b"abc"),
        Arc::new(PanickingFile("crash.bin".to_string())),
    ];
    let report = ingestor.ingest(files).await;

    assert_eq!(report.total(), 2);
    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].filename, "crash.bin");
    assert!(matches!(report.failures[0].error, BridgeError::FileRead { .. }));
    assert_eq!(module.file_drops().len(), 1);
}

#[tokio::test]
async fn test_oversized_known_size_rejected_without_allocation() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), 8);

    let report = ingestor
        .ingest(vec![memory("big.bin", &[0u8; 9]), memory("small", b"ok")])
        .await;

    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0].error {
        BridgeError::TransferTooLarge {
            filename,
            length,
            limit,
        } => {
            assert_eq!(filename, "big.bin");
            assert_eq!(*length, 9);
            assert_eq!(*limit, 8);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!module.calls().contains(&ModuleCall::Malloc(9)));
}

#[tokio::test]
async fn test_oversized_unknown_size_rejected_after_read() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), 4);

    let files: Vec<Arc<dyn DroppedFile>> = vec![SlowFile::new("big", b"12345", 0)];
    let report = ingestor.ingest(files).await;

    assert!(report.transfers.is_empty());
    assert!(matches!(
        report.failures[0].error,
        BridgeError::TransferTooLarge { length: 5, .. }
    ));
    assert!(module.file_drops().is_empty());
    assert!(module
        .calls()
        .iter()
        .all(|call| !matches!(call, ModuleCall::Malloc(_))));
}

#[tokio::test]
async fn test_file_at_limit_accepted() {
    let module = RecordingModule::new();
    let ingestor = FileDropIngestor::new(module.clone(), 4);

    let report = ingestor.ingest(vec![memory("edge", b"1234")]).await;

    assert_eq!(report.transfers.len(), 1);
}

#[tokio::test]
async fn test_null_allocation_fails_transfer() {
    let module = RecordingModule::out_of_memory();
    let ingestor = FileDropIngestor::new(module.clone(), LIMIT);

    let report = ingestor.ingest(vec![memory("a.txt", b"hello")]).await;

    assert!(matches!(
        report.failures[0].error,
        BridgeError::AllocationFailed { size: 5 }
    ));
    assert!(module.file_drops().is_empty());
}
