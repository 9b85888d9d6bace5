//! WebAssembly bindings for bridge-wasm
//!
//! JavaScript entry points for pages that load the bridge next to an
//! Emscripten module.
//!
//! ```javascript
//! import init, { installInputBridge } from "./bridge_wasm.js";
//!
//! await init();
//! const bridge = installInputBridge(Module, { keyboardEvents: true });
//! // ...later
//! bridge?.pastedText;
//! ```

use bridge_traits::logging::LogLevel;
use core_runtime::config::BridgeConfig;
use core_runtime::logging::{init_logging, LoggingConfig};
use js_sys::Object;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::bootstrap::{install, InstalledBridge};
use crate::module::EmscriptenModule;

// =============================================================================
// Error Handling
// =============================================================================

fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================================
// Options
// =============================================================================

/// Options accepted by [`install_input_bridge`]. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallOptions {
    max_transfer_bytes: Option<usize>,
    text_surface_id: Option<String>,
    focus_surface: Option<bool>,
    keyboard_events: Option<bool>,
    vfs_root: Option<String>,
}

impl InstallOptions {
    fn from_js(options: JsValue) -> Result<Self, JsValue> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(to_js_error)
    }

    fn into_config(self) -> Result<BridgeConfig, JsValue> {
        let mut builder = BridgeConfig::builder();
        if let Some(bytes) = self.max_transfer_bytes {
            builder = builder.max_transfer_bytes(bytes);
        }
        if let Some(id) = self.text_surface_id {
            builder = builder.text_surface_id(id);
        }
        if let Some(focus) = self.focus_surface {
            builder = builder.focus_surface(focus);
        }
        if let Some(keyboard) = self.keyboard_events {
            builder = builder.keyboard_events(keyboard);
        }
        if let Some(root) = self.vfs_root {
            builder = builder.vfs_root(root);
        }
        builder.build().map_err(to_js_error)
    }
}

// =============================================================================
// Installed Bridge
// =============================================================================

/// JavaScript handle to an installed input bridge.
///
/// Calling `free()` detaches every listener.
#[wasm_bindgen]
pub struct JsInputBridge {
    inner: InstalledBridge,
}

#[wasm_bindgen]
impl JsInputBridge {
    /// Text of the most recent paste, `""` before the first one.
    #[wasm_bindgen(getter, js_name = pastedText)]
    pub fn pasted_text(&self) -> String {
        self.inner.bridge().state().pasted_text()
    }

    /// Whether a drag is currently over the page.
    #[wasm_bindgen(getter, js_name = dragActive)]
    pub fn drag_active(&self) -> bool {
        self.inner.bridge().state().drag_active()
    }

    /// Largest file the bridge copies into module memory.
    #[wasm_bindgen(getter, js_name = maxTransferBytes)]
    pub fn max_transfer_bytes(&self) -> usize {
        self.inner.bridge().config().max_transfer_bytes
    }

    /// DOM events the bridge listens to.
    #[wasm_bindgen(js_name = listenedEvents)]
    pub fn listened_events(&self) -> Vec<String> {
        self.inner
            .listened_events()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Install the input bridge for an Emscripten `Module`.
///
/// Returns `undefined` inside workers, where there is no document.
///
/// # Example
///
/// ```javascript
/// const bridge = installInputBridge(Module, {
///   textSurfaceId: "text_input_overlay",
///   maxTransferBytes: 65536,
///   vfsRoot: "/data",
/// });
/// ```
#[wasm_bindgen(js_name = installInputBridge)]
pub fn install_input_bridge(
    module: Object,
    options: JsValue,
) -> Result<Option<JsInputBridge>, JsValue> {
    console_error_panic_hook::set_once();

    let config = InstallOptions::from_js(options)?.into_config()?;
    let installed = install(EmscriptenModule::new(module), config).map_err(to_js_error)?;
    Ok(installed.map(|inner| JsInputBridge { inner }))
}

/// Route `tracing` output to the browser console.
///
/// `level` is one of `trace`, `debug`, `info`, `warn`, `error` (default `info`).
#[wasm_bindgen(js_name = initInputBridgeLogging)]
pub fn init_input_bridge_logging(level: Option<String>) -> Result<(), JsValue> {
    let level = match level.as_deref().unwrap_or("info") {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" => LogLevel::Warn,
        "error" => LogLevel::Error,
        other => return Err(JsValue::from_str(&format!("unknown log level '{other}'"))),
    };
    init_logging(LoggingConfig::default().with_level(level)).map_err(to_js_error)
}

// =============================================================================
// Module Info
// =============================================================================

/// Get the bridge-wasm version
#[wasm_bindgen(js_name = bridgeWasmVersion)]
pub fn bridge_wasm_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the bridge-wasm name
#[wasm_bindgen(js_name = bridgeWasmName)]
pub fn bridge_wasm_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_version() {
        let version = bridge_wasm_version();
        assert!(!version.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_missing_options_use_defaults() {
        let config = InstallOptions::from_js(JsValue::UNDEFINED)
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_zero_ceiling_rejected() {
        let options = InstallOptions {
            max_transfer_bytes: Some(0),
            ..Default::default()
        };
        assert!(options.into_config().is_err());
    }
}
