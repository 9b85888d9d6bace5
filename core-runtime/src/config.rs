//! # Bridge Configuration Module
//!
//! Provides configuration management for the input bridge.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`BridgeConfig`]. Every limit the bridge enforces is explicit here rather
//! than implied by the module's memory layout; in particular the maximum
//! number of bytes a single dropped file may move across the module boundary.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::BridgeConfig;
//!
//! let config = BridgeConfig::builder()
//!     .max_transfer_bytes(128 * 1024)
//!     .text_surface_id("text_input_overlay")
//!     .keyboard_events(true)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.max_transfer_bytes, 128 * 1024);
//! ```
//!
//! ## Error Handling
//!
//! The builder validates its inputs and returns actionable messages:
//!
//! ```should_panic
//! use core_runtime::config::BridgeConfig;
//!
//! let config = BridgeConfig::builder()
//!     .max_transfer_bytes(0)
//!     .build()
//!     .expect("Should fail - zero transfer ceiling");
//! ```

use crate::error::{Error, Result};

/// Default ceiling for a single file transfer (64 KiB).
///
/// Matches the receiving buffers the module keeps in its working-memory
/// region. Larger files are rejected rather than written past the end.
pub const DEFAULT_MAX_TRANSFER_BYTES: usize = 64 * 1024;

/// Element id of the editable overlay used for text composition.
pub const DEFAULT_TEXT_SURFACE_ID: &str = "text_input_overlay";

/// Upper bound accepted for `max_transfer_bytes` (the wasm32 address space).
const MAX_TRANSFER_CEILING: usize = u32::MAX as usize;

/// Input bridge configuration.
///
/// Use [`BridgeConfigBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Largest file, in bytes, the bridge will copy into module memory.
    pub max_transfer_bytes: usize,

    /// DOM id of the editable surface that stages composed text.
    pub text_surface_id: String,

    /// Focus the editable surface once listeners are attached.
    pub focus_surface: bool,

    /// Translate and forward `keydown`/`keyup` events.
    pub keyboard_events: bool,

    /// Directory to create in the module's virtual filesystem before first use.
    pub vfs_root: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_transfer_bytes: DEFAULT_MAX_TRANSFER_BYTES,
            text_surface_id: DEFAULT_TEXT_SURFACE_ID.to_string(),
            focus_surface: true,
            keyboard_events: false,
            vfs_root: None,
        }
    }
}

impl BridgeConfig {
    /// Creates a new builder for constructing a `BridgeConfig`.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - The transfer ceiling is non-zero and addressable by a wasm32 module
    /// - The text surface id is not blank
    /// - The virtual filesystem root, if set, is an absolute path
    pub fn validate(&self) -> Result<()> {
        if self.max_transfer_bytes == 0 {
            return Err(Error::Config(
                "Maximum transfer size must be greater than 0 bytes".to_string(),
            ));
        }

        if self.max_transfer_bytes > MAX_TRANSFER_CEILING {
            return Err(Error::Config(format!(
                "Maximum transfer size exceeds the module address space ({} bytes)",
                MAX_TRANSFER_CEILING
            )));
        }

        if self.text_surface_id.trim().is_empty() {
            return Err(Error::Config(
                "Text surface id cannot be empty. \
                 Point it at the contenteditable overlay that captures composed text."
                    .to_string(),
            ));
        }

        if let Some(root) = &self.vfs_root {
            if !root.starts_with('/') {
                return Err(Error::Config(format!(
                    "Virtual filesystem root must be absolute, got '{}'",
                    root
                )));
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`BridgeConfig`] instances.
///
/// Unset options fall back to [`BridgeConfig::default`].
#[derive(Debug, Default)]
pub struct BridgeConfigBuilder {
    max_transfer_bytes: Option<usize>,
    text_surface_id: Option<String>,
    focus_surface: Option<bool>,
    keyboard_events: Option<bool>,
    vfs_root: Option<String>,
}

impl BridgeConfigBuilder {
    /// Sets the largest file, in bytes, that may be copied into module memory.
    pub fn max_transfer_bytes(mut self, bytes: usize) -> Self {
        self.max_transfer_bytes = Some(bytes);
        self
    }

    /// Sets the DOM id of the editable surface.
    pub fn text_surface_id(mut self, id: impl Into<String>) -> Self {
        self.text_surface_id = Some(id.into());
        self
    }

    /// Controls whether the surface is focused after installation.
    pub fn focus_surface(mut self, focus: bool) -> Self {
        self.focus_surface = Some(focus);
        self
    }

    /// Enables key event translation.
    pub fn keyboard_events(mut self, enable: bool) -> Self {
        self.keyboard_events = Some(enable);
        self
    }

    /// Sets a directory to create in the module's virtual filesystem.
    pub fn vfs_root(mut self, root: impl Into<String>) -> Self {
        self.vfs_root = Some(root.into());
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when any option fails
    /// [`BridgeConfig::validate`].
    pub fn build(self) -> Result<BridgeConfig> {
        let defaults = BridgeConfig::default();

        let config = BridgeConfig {
            max_transfer_bytes: self
                .max_transfer_bytes
                .unwrap_or(defaults.max_transfer_bytes),
            text_surface_id: self.text_surface_id.unwrap_or(defaults.text_surface_id),
            focus_surface: self.focus_surface.unwrap_or(defaults.focus_surface),
            keyboard_events: self.keyboard_events.unwrap_or(defaults.keyboard_events),
            vfs_root: self.vfs_root.or(defaults.vfs_root),
        };

        config.validate()?;
        Ok(config)
    }
}
