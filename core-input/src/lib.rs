//! # Core Input Module
//!
//! Host-to-module input bridge logic:
//! - Text input normalization (committed/composed text only)
//! - Clipboard capture into shared state
//! - Drag state tracking
//! - File drop ingestion across the module memory boundary
//! - Key event translation
//!
//! ## Overview
//!
//! The host turns native events into [`HostEvent`]s and hands them to
//! [`InputBridge::dispatch`]. The bridge updates [`BridgeState`] and calls
//! into the module through the
//! [`ModuleEntryPoints`](bridge_traits::module::ModuleEntryPoints) contract.
//! Data only flows from host to module.

pub mod allocator;
pub mod bridge;
pub mod clipboard;
pub mod dispatch;
pub mod drag;
pub mod events;
pub mod file_drop;
pub mod keyboard;
pub mod state;
pub mod text_input;

pub use bridge::{InputBridge, InputBridgeBuilder};
pub use dispatch::{Dispatched, EventTable};
pub use events::{Disposition, EventKind, HostEvent};
pub use file_drop::{DropReport, DroppedFileTransfer, FileDropFailure};
pub use state::BridgeState;
pub use text_input::EditableSurface;
