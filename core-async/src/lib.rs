//! Runtime-agnostic task spawning for the input bridge.
//!
//! The bridge reads every dropped file in its own asynchronous task. On the
//! browser those tasks run on the page's event loop; in native tests they run
//! on Tokio. This crate hides the difference behind a single [`task::spawn`]
//! that returns an awaitable [`task::JoinHandle`] on both targets.
//!
//! # Examples
//!
//! ```rust
//! use core_async::task;
//!
//! async fn example() {
//!     let handle = task::spawn(async { 42 });
//!     assert_eq!(handle.await.unwrap(), 42);
//! }
//! ```

pub mod task;

// WASM-specific implementations
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use task::spawn;
