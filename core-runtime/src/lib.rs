//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the input bridge:
//! - Bridge configuration with fail-fast validation
//! - Logging and tracing infrastructure
//! - Runtime error types
//!
//! ## Overview
//!
//! Components in `core-input` take their limits (maximum transferable file
//! size, surface ids) from [`config::BridgeConfig`] and report through
//! `tracing`. Hosts call [`logging::init_logging`] once during startup.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{BridgeConfig, BridgeConfigBuilder};
pub use error::{Error, Result};
