//! Integration tests for core-async on native platforms.

#![cfg(not(target_arch = "wasm32"))]

use core_async::task;

#[tokio::test]
async fn test_task_spawn() {
    let handle = task::spawn(async { 42 });
    let result = handle.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_spawned_tasks_complete_independently() {
    let handles: Vec<_> = (0..4usize)
        .map(|i| task::spawn(async move { i * 10 }))
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results.sort_unstable();
    assert_eq!(results, vec![0, 10, 20, 30]);
}

#[tokio::test]
async fn test_panicking_task_reports_join_error() {
    let handle = task::spawn(async {
        panic!("read failed");
    });
    let err = handle.await.unwrap_err();
    assert!(err.is_panic());
}
