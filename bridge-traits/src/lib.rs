//! # Host/Module Bridge Traits
//!
//! Contract between the input bridge and the compiled application module it
//! feeds.
//!
//! ## Overview
//!
//! The bridge runs inside a web page next to a compiled module. It translates
//! browser input (committed text, clipboard paste, drag-and-drop files, key
//! presses) into calls the module can consume across its memory boundary. The
//! module itself is opaque: it is reachable only through the entry points
//! described here.
//!
//! ## Traits
//!
//! ### Module entry points
//! - [`ModuleEntryPoints`](module::ModuleEntryPoints) - Outbound capability: deliver text,
//!   set drag state, allocate and fill boundary memory, deliver a dropped file
//! - [`KeyEventSink`](module::KeyEventSink) - Optional receiver for packed key codes
//!
//! ### Host inputs
//! - [`DroppedFile`](files::DroppedFile) - Async byte source for one dropped file
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! implementations should:
//!
//! - Report a missing module export as `BridgeError::NotAvailable`
//! - Convert host-specific errors (JavaScript exceptions) to `BridgeError`
//! - Include the filename or export name in the message
//!
//! ## Thread Safety
//!
//! Native builds require `Send + Sync` so the bridge logic can be exercised
//! from async test runtimes. WebAssembly builds drop those bounds because
//! browser objects are single-threaded. See [`platform`].
//!
//! ## Examples
//!
//! ### Implementing ModuleEntryPoints
//!
//! ```ignore
//! use bridge_traits::error::Result;
//! use bridge_traits::module::{BufferHandle, ModuleEntryPoints};
//!
//! struct NullModule;
//!
//! impl ModuleEntryPoints for NullModule {
//!     fn handle_text_input(&self, _text: &str) -> Result<()> { Ok(()) }
//!     fn set_drag_state(&self, _active: bool) -> Result<()> { Ok(()) }
//!     fn heap_malloc(&self, _size: usize) -> Result<BufferHandle> { Ok(BufferHandle::new(8)) }
//!     fn heap_write(&self, _handle: BufferHandle, _bytes: &[u8]) -> Result<()> { Ok(()) }
//!     fn handle_file_drop(&self, _name: &str, _len: usize, _handle: BufferHandle) -> Result<()> { Ok(()) }
//! }
//! ```

pub mod error;
pub mod files;
pub mod logging;
pub mod module;
pub mod platform;

pub use error::BridgeError;

// Re-export commonly used types
pub use files::{DroppedFile, MemoryFile};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use module::{BufferHandle, KeyEventSink, ModuleEntryPoints};
