//! Boundary Allocator Client
//!
//! Moves bytes into memory owned by the module: ask the module's allocator
//! for a buffer of the right size, then copy into it. The returned handle is
//! not tracked; releasing it is the module's job.
//!
//! Every transfer is checked against an explicit ceiling first. The module's
//! receiving buffers have a fixed size, and writing past them would corrupt
//! unrelated module memory, so oversized transfers fail with
//! [`BridgeError::TransferTooLarge`] before anything is allocated.

use std::sync::Arc;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::module::{BufferHandle, ModuleEntryPoints};
use tracing::trace;

pub struct BoundaryAllocator {
    module: Arc<dyn ModuleEntryPoints>,
    max_transfer_bytes: usize,
}

impl BoundaryAllocator {
    pub fn new(module: Arc<dyn ModuleEntryPoints>, max_transfer_bytes: usize) -> Self {
        Self {
            module,
            max_transfer_bytes,
        }
    }

    pub fn max_transfer_bytes(&self) -> usize {
        self.max_transfer_bytes
    }

    /// Fail if `length` bytes of `filename` may not cross the boundary.
    pub fn check(&self, filename: &str, length: usize) -> Result<()> {
        if length > self.max_transfer_bytes {
            return Err(BridgeError::TransferTooLarge {
                filename: filename.to_string(),
                length,
                limit: self.max_transfer_bytes,
            });
        }
        Ok(())
    }

    /// Allocate a module buffer sized for `bytes` and copy them in.
    ///
    /// Zero-length transfers still allocate, so the caller always has a
    /// handle to pass on.
    pub fn transfer(&self, filename: &str, bytes: &[u8]) -> Result<BufferHandle> {
        self.check(filename, bytes.len())?;

        let handle = self.module.heap_malloc(bytes.len())?;
        if handle.is_null() && !bytes.is_empty() {
            return Err(BridgeError::AllocationFailed { size: bytes.len() });
        }

        if !bytes.is_empty() {
            self.module.heap_write(handle, bytes)?;
        }

        trace!(%handle, bytes = bytes.len(), "boundary buffer filled");
        Ok(handle)
    }
}
