//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`core-input`, `bridge-wasm`). Host pages can depend on
//! `input-bridge-workspace` and enable the `wasm` feature to pull in the
//! browser wiring without naming each crate individually.

pub use core_input::{BridgeState, InputBridge};

#[cfg(feature = "wasm")]
pub use bridge_wasm;
