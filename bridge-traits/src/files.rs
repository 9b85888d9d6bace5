//! Dropped File Abstractions
//!
//! A drop event hands the bridge a list of host file objects. Reading one is
//! asynchronous and may fail independently of its siblings.

use async_trait::async_trait;
use bytes::Bytes;

use crate::{error::Result, platform::PlatformSendSync};

/// One file delivered by a drop event.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::files::DroppedFile;
///
/// async fn size_of(file: &dyn DroppedFile) -> usize {
///     file.read_bytes().await.map(|b| b.len()).unwrap_or(0)
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DroppedFile: PlatformSendSync {
    /// Original filename as reported by the host.
    fn name(&self) -> String;

    /// Byte length, when the host knows it before reading.
    ///
    /// Lets the bridge reject oversized files without reading them.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Read the full contents of the file.
    ///
    /// Implementations should report failures as
    /// [`BridgeError::FileRead`](crate::BridgeError::FileRead).
    async fn read_bytes(&self) -> Result<Bytes>;
}

/// In-memory file, used by native hosts and tests.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    contents: Bytes,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DroppedFile for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> Option<usize> {
        Some(self.contents.len())
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        Ok(self.contents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_file_reads_contents() {
        let file = MemoryFile::new("a.txt", &b"hello"[..]);
        assert_eq!(file.name(), "a.txt");
        assert_eq!(file.read_bytes().await.unwrap(), Bytes::from_static(b"hello"));
    }

    #[tokio::test]
    async fn test_memory_file_empty() {
        let file = MemoryFile::new("b.bin", Vec::new());
        assert!(file.read_bytes().await.unwrap().is_empty());
    }
}
