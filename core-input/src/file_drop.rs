//! File Drop Ingestor
//!
//! Each dropped file is read in its own task. Finished reads land on a
//! channel; the ingestor drains it and, per file, copies the bytes into a
//! boundary buffer and calls `handle_file_drop`. Files complete in whatever
//! order their reads finish, and a failure for one file is recorded without
//! touching the others.
//!
//! ```text
//!  drop ──┬─ task(read a.txt) ──┐
//!         ├─ task(read b.bin) ──┼──> channel ──> allocate + copy + handle_file_drop
//!         └─ task(read c.png) ──┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::files::DroppedFile;
use bridge_traits::module::{BufferHandle, ModuleEntryPoints};
use bytes::Bytes;
use core_runtime::logging::strip_path;
use futures::channel::mpsc;
use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::allocator::BoundaryAllocator;

/// A file handed to the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFileTransfer {
    /// Position in the originating drop event's file list.
    pub index: usize,
    pub filename: String,
    pub length: usize,
    pub buffer: BufferHandle,
}

/// A file that could not be handed to the module.
#[derive(Debug)]
pub struct FileDropFailure {
    pub index: usize,
    pub filename: String,
    pub error: BridgeError,
}

/// Per-file results of one drop, in completion order.
#[derive(Debug, Default)]
pub struct DropReport {
    pub transfers: Vec<DroppedFileTransfer>,
    pub failures: Vec<FileDropFailure>,
}

impl DropReport {
    pub fn total(&self) -> usize {
        self.transfers.len() + self.failures.len()
    }
}

struct FileRead {
    index: usize,
    filename: String,
    contents: Result<Bytes>,
}

pub struct FileDropIngestor {
    module: Arc<dyn ModuleEntryPoints>,
    allocator: BoundaryAllocator,
}

impl FileDropIngestor {
    pub fn new(module: Arc<dyn ModuleEntryPoints>, max_transfer_bytes: usize) -> Self {
        let allocator = BoundaryAllocator::new(Arc::clone(&module), max_transfer_bytes);
        Self { module, allocator }
    }

    /// Read every file concurrently and deliver each one as it completes.
    ///
    /// Resolves once every file has been delivered or has failed.
    pub async fn ingest(&self, files: Vec<Arc<dyn DroppedFile>>) -> DropReport {
        let (tx, mut rx) = mpsc::unbounded();
        let mut report = DropReport::default();
        let limit = self.allocator.max_transfer_bytes();
        // Files whose read was started but has not reported back.
        let mut pending = BTreeMap::new();

        for (index, file) in files.into_iter().enumerate() {
            let filename = file.name();

            // Skip the read entirely when the host already knows it is too big.
            if let Some(size) = file.size().filter(|&size| size > limit) {
                self.record_failure(
                    &mut report,
                    index,
                    filename.clone(),
                    BridgeError::TransferTooLarge {
                        filename,
                        length: size,
                        limit,
                    },
                );
                continue;
            }

            pending.insert(index, filename.clone());
            let tx = tx.clone();
            // Detached: the result comes back through the channel.
            let _handle = core_async::spawn(async move {
                let contents = file.read_bytes().await;
                let _ = tx.unbounded_send(FileRead {
                    index,
                    filename,
                    contents,
                });
            });
        }
        drop(tx);

        while let Some(read) = rx.next().await {
            let FileRead {
                index,
                filename,
                contents,
            } = read;
            pending.remove(&index);

            let outcome = contents.and_then(|bytes| self.deliver(index, &filename, &bytes));
            match outcome {
                Ok(transfer) => report.transfers.push(transfer),
                Err(err) => self.record_failure(&mut report, index, filename, err),
            }
        }

        // A read task that died (panic, cancellation) drops its sender unsent.
        for (index, filename) in pending {
            let error = BridgeError::FileRead {
                filename: filename.clone(),
                message: "read task ended without a result".to_string(),
            };
            self.record_failure(&mut report, index, filename, error);
        }

        info!(
            delivered = report.transfers.len(),
            failed = report.failures.len(),
            "file drop ingested"
        );
        report
    }

    fn deliver(&self, index: usize, filename: &str, bytes: &[u8]) -> Result<DroppedFileTransfer> {
        let buffer = self.allocator.transfer(filename, bytes)?;
        self.module
            .handle_file_drop(filename, bytes.len(), buffer)?;

        debug!(
            file = strip_path(filename),
            length = bytes.len(),
            %buffer,
            "file delivered"
        );

        Ok(DroppedFileTransfer {
            index,
            filename: filename.to_string(),
            length: bytes.len(),
            buffer,
        })
    }

    fn record_failure(
        &self,
        report: &mut DropReport,
        index: usize,
        filename: String,
        error: BridgeError,
    ) {
        warn!(file = strip_path(&filename), error = %error, "file drop failed");
        report.failures.push(FileDropFailure {
            index,
            filename,
            error,
        });
    }
}
