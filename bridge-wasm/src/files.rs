//! Dropped files backed by `web_sys::File`.

use async_trait::async_trait;
use bridge_traits::error::{BridgeError, Result};
use bridge_traits::files::DroppedFile;
use bytes::Bytes;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use crate::error::WasmError;

/// A file from a drop event's `DataTransfer`.
pub struct BrowserFile {
    file: web_sys::File,
}

impl BrowserFile {
    /// Wrap a browser file handle.
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

#[async_trait(?Send)]
impl DroppedFile for BrowserFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn size(&self) -> Option<usize> {
        Some(self.file.size() as usize)
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|err| BridgeError::FileRead {
                filename: self.file.name(),
                message: WasmError::from(err).to_string(),
            })?;
        Ok(Bytes::from(Uint8Array::new(&buffer).to_vec()))
    }
}
