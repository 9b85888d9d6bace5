//! WASM-specific runtime pieces.
//!
//! Everything here runs on the page's single event-loop thread, so nothing
//! requires `Send` or `Sync`.

pub mod task;
