//! Error types for the browser wiring

use bridge_traits::error::BridgeError;
use thiserror::Error;
use wasm_bindgen::JsCast;

/// Result type for browser wiring operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors raised while talking to the page or the module
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript error from web-sys or a module call
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// A required DOM element is not in the document
    #[error("Element not found: #{0}")]
    MissingElement(String),

    /// The module does not export a required function or property
    #[error("Module export not found: {0}")]
    MissingExport(String),

    /// Invalid bridge configuration or missing capability
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),

    /// Unsupported operation
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl From<WasmError> for BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::MissingExport(name) => BridgeError::NotAvailable(name),
            other => BridgeError::OperationFailed(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for WasmError {
    fn from(js_value: wasm_bindgen::JsValue) -> Self {
        let msg = if js_value.is_string() {
            js_value
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string())
        } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
            error.message().into()
        } else {
            format!("{:?}", js_value)
        };
        WasmError::JavaScript(msg)
    }
}
