//! Browser Wiring for the Input Bridge
//!
//! Connects `core-input` to a page hosting an Emscripten-compiled module:
//!
//! - [`EmscriptenModule`]: the module's exported entry points, reached through
//!   `Module.ccall` and `Module.HEAPU8`
//! - [`dom`]: DOM event conversion and listener lifetime
//! - [`BrowserFile`]: `DroppedFile` over `web_sys::File`
//! - [`install`]: environment detection and listener installation
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It will not compile for native targets.
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::{install, EmscriptenModule};
//! use core_runtime::config::BridgeConfig;
//!
//! let module = EmscriptenModule::from_global()?;
//! if let Some(installed) = install(module, BridgeConfig::default())? {
//!     // Listeners stay attached while `installed` is alive.
//!     std::mem::forget(installed);
//! }
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod dom;
pub mod error;
pub mod files;
pub mod module;
pub mod wasm;

pub use bootstrap::{install, InstalledBridge};
pub use error::{WasmError, WasmResult};
pub use files::BrowserFile;
pub use module::EmscriptenModule;
