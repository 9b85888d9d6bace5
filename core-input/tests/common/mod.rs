//! Recording stubs shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bridge_traits::error::{BridgeError, Result};
use bridge_traits::files::DroppedFile;
use bridge_traits::module::{BufferHandle, KeyEventSink, ModuleEntryPoints};
use bytes::Bytes;
use core_input::EditableSurface;

/// One call observed on the module boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleCall {
    TextInput(String),
    DragState(bool),
    Malloc(usize),
    FileDrop {
        filename: String,
        length: usize,
        handle: BufferHandle,
    },
    Key(u32),
}

/// Module stub that records calls and simulates a bump-allocated heap.
pub struct RecordingModule {
    calls: Mutex<Vec<ModuleCall>>,
    heap: Mutex<Heap>,
    fail_malloc: bool,
}

struct Heap {
    next: u32,
    buffers: HashMap<BufferHandle, Vec<u8>>,
}

impl RecordingModule {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::with_failing_malloc(false))
    }

    /// A module whose allocator always returns null.
    pub fn out_of_memory() -> Arc<Self> {
        Arc::new(Self::with_failing_malloc(true))
    }

    fn with_failing_malloc(fail_malloc: bool) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            heap: Mutex::new(Heap {
                next: 1024,
                buffers: HashMap::new(),
            }),
            fail_malloc,
        }
    }

    pub fn calls(&self) -> Vec<ModuleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ModuleCall::TextInput(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn drag_states(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ModuleCall::DragState(active) => Some(active),
                _ => None,
            })
            .collect()
    }

    /// `(filename, length, handle)` for every delivered file.
    pub fn file_drops(&self) -> Vec<(String, usize, BufferHandle)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ModuleCall::FileDrop {
                    filename,
                    length,
                    handle,
                } => Some((filename, length, handle)),
                _ => None,
            })
            .collect()
    }

    pub fn keys(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ModuleCall::Key(code) => Some(code),
                _ => None,
            })
            .collect()
    }

    pub fn buffer(&self, handle: BufferHandle) -> Option<Vec<u8>> {
        self.heap.lock().unwrap().buffers.get(&handle).cloned()
    }

    fn record(&self, call: ModuleCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ModuleEntryPoints for RecordingModule {
    fn handle_text_input(&self, text: &str) -> Result<()> {
        self.record(ModuleCall::TextInput(text.to_string()));
        Ok(())
    }

    fn set_drag_state(&self, active: bool) -> Result<()> {
        self.record(ModuleCall::DragState(active));
        Ok(())
    }

    fn heap_malloc(&self, size: usize) -> Result<BufferHandle> {
        self.record(ModuleCall::Malloc(size));
        if self.fail_malloc {
            return Ok(BufferHandle::new(0));
        }
        let mut heap = self.heap.lock().unwrap();
        let handle = BufferHandle::new(heap.next);
        // Zero-size allocations still get a distinct address.
        heap.next += size.max(1) as u32;
        heap.buffers.insert(handle, vec![0; size]);
        Ok(handle)
    }

    fn heap_write(&self, handle: BufferHandle, bytes: &[u8]) -> Result<()> {
        let mut heap = self.heap.lock().unwrap();
        let buffer = heap
            .buffers
            .get_mut(&handle)
            .ok_or_else(|| BridgeError::OperationFailed(format!("unknown buffer {}", handle)))?;
        if bytes.len() > buffer.len() {
            return Err(BridgeError::OperationFailed("heap overflow".to_string()));
        }
        buffer[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn handle_file_drop(&self, filename: &str, length: usize, handle: BufferHandle) -> Result<()> {
        self.record(ModuleCall::FileDrop {
            filename: filename.to_string(),
            length,
            handle,
        });
        Ok(())
    }
}

impl KeyEventSink for RecordingModule {
    fn handle_key_event(&self, code: u32) -> Result<()> {
        self.record(ModuleCall::Key(code));
        Ok(())
    }
}

/// Editable surface stub holding staged text.
#[derive(Default)]
pub struct RecordingSurface {
    content: Mutex<String>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Simulate the browser staging text in the surface.
    pub fn stage(&self, text: &str) {
        self.content.lock().unwrap().push_str(text);
    }

    pub fn content(&self) -> String {
        self.content.lock().unwrap().clone()
    }
}

impl EditableSurface for RecordingSurface {
    fn clear(&self) {
        self.content.lock().unwrap().clear();
    }
}

/// File whose read completes after a delay and reports no size up front.
pub struct SlowFile {
    pub name: String,
    pub contents: Bytes,
    pub delay: Duration,
}

impl SlowFile {
    pub fn new(name: &str, contents: &[u8], delay_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            contents: Bytes::copy_from_slice(contents),
            delay: Duration::from_millis(delay_ms),
        })
    }
}

#[async_trait]
impl DroppedFile for SlowFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        tokio::time::sleep(self.delay).await;
        Ok(self.contents.clone())
    }
}

/// File whose read always fails.
pub struct UnreadableFile(pub String);

#[async_trait]
impl DroppedFile for UnreadableFile {
    fn name(&self) -> String {
        self.0.clone()
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        Err(BridgeError::FileRead {
            filename: self.0.clone(),
            message: "NotReadableError".to_string(),
        })
    }
}

/// File whose read task panics before producing a result.
pub struct PanickingFile(pub String);

#[async_trait]
impl DroppedFile for PanickingFile {
    fn name(&self) -> String {
        self.0.clone()
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        panic!("reader for {} crashed", self.0);
    }
}
