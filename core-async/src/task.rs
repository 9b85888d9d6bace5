//! Task spawning abstractions.
//!
//! - On native platforms: `tokio::task::spawn`
//! - On WASM: `wasm_bindgen_futures::spawn_local` with an awaitable `JoinHandle`
//!
//! ## Native (Tokio)
//! - Tasks must be `Send + 'static` and may run on any worker thread
//!
//! ## WASM
//! - Tasks must be `'static` but not `Send` (single-threaded event loop)
//! - Tasks cannot be aborted once scheduled

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::task::{JoinError, JoinHandle};

#[cfg(not(target_arch = "wasm32"))]
/// Spawns a new asynchronous task on the current Tokio runtime.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::task::spawn(future)
}

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::task::{spawn, JoinError, JoinHandle};

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, JoinError>;
