//! Module Entry Point Abstractions
//!
//! The compiled module exports a handful of functions the bridge calls into.
//! Everything behind these calls (what the module does with the text, how it
//! draws a highlighted drop target, how it frees the buffers it receives) is
//! outside the bridge.

use std::fmt;

use crate::{error::Result, platform::PlatformSendSync};

/// Opaque address of module-owned memory.
///
/// Handles are produced by [`ModuleEntryPoints::heap_malloc`] and are only
/// meaningful to the module that produced them. The bridge never frees them;
/// ownership passes to the module as soon as the handle is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(u32);

impl BufferHandle {
    /// Wrap a raw linear-memory address.
    pub const fn new(address: u32) -> Self {
        Self(address)
    }

    /// Raw linear-memory address.
    pub const fn address(self) -> u32 {
        self.0
    }

    /// True for the null address returned by a failing allocator.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Outbound capability exposed by the compiled module.
///
/// Each method maps onto one exported entry point:
///
/// | Method | Export |
/// |--------|--------|
/// | `handle_text_input` | `handle_text_input(text: string) -> void` |
/// | `set_drag_state` | `set_drag_state(active: 0\|1) -> void` |
/// | `heap_malloc` | `heap_malloc(size: integer) -> address` |
/// | `heap_write` | copy into the module heap at `address` |
/// | `handle_file_drop` | `handle_file_drop(filename, length, address) -> void` |
///
/// Implementations return [`BridgeError::NotAvailable`](crate::BridgeError::NotAvailable)
/// when an export is missing so that callers can degrade without taking the
/// page down.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::module::ModuleEntryPoints;
///
/// fn commit(module: &dyn ModuleEntryPoints, text: &str) {
///     if let Err(err) = module.handle_text_input(text) {
///         tracing::warn!(error = %err, "text input dropped");
///     }
/// }
/// ```
pub trait ModuleEntryPoints: PlatformSendSync {
    /// Deliver a committed text insertion, verbatim.
    fn handle_text_input(&self, text: &str) -> Result<()>;

    /// Report whether a drag is currently over the page.
    fn set_drag_state(&self, active: bool) -> Result<()>;

    /// Allocate `size` bytes of module-owned memory.
    ///
    /// The bridge keeps no record of the returned handle.
    fn heap_malloc(&self, size: usize) -> Result<BufferHandle>;

    /// Copy `bytes` into module memory starting at `handle`.
    ///
    /// Callers must not write more bytes than were requested from
    /// [`heap_malloc`](Self::heap_malloc) for the same handle.
    fn heap_write(&self, handle: BufferHandle, bytes: &[u8]) -> Result<()>;

    /// Notify the module that `length` bytes of `filename` are ready at `handle`.
    fn handle_file_drop(&self, filename: &str, length: usize, handle: BufferHandle) -> Result<()>;
}

/// Receiver for packed key codes.
///
/// Key codes carry the key in the low 22 bits and modifier/press flags above
/// that; see `core_input::keyboard` for the layout.
pub trait KeyEventSink: PlatformSendSync {
    /// Deliver one packed key code.
    fn handle_key_event(&self, code: u32) -> Result<()>;
}
