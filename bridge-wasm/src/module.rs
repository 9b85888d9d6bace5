//! The Emscripten `Module` object.
//!
//! Exported C functions are invoked through `Module.ccall`, which marshals
//! strings into module memory for the duration of the call. File bytes are
//! copied with `Module.HEAPU8.set`; the view is looked up on every write
//! because memory growth replaces it.

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::module::{BufferHandle, KeyEventSink, ModuleEntryPoints};
use js_sys::{Array, Function, Object, Reflect, Uint8Array};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{WasmError, WasmResult};

const PASTED_TEXT: &str = "pasted_text";

/// Handle to the page's Emscripten `Module`.
#[derive(Debug, Clone)]
pub struct EmscriptenModule {
    module: Object,
}

impl EmscriptenModule {
    /// Wrap an explicit `Module` object.
    pub fn new(module: Object) -> Self {
        Self { module }
    }

    /// Use the global `Module` defined by the Emscripten loader.
    pub fn from_global() -> WasmResult<Self> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str("Module"))?;
        if value.is_undefined() || value.is_null() {
            return Err(WasmError::MissingExport("Module".to_string()));
        }
        let module = value
            .dyn_into::<Object>()
            .map_err(|_| WasmError::MissingExport("Module".to_string()))?;
        Ok(Self::new(module))
    }

    /// The wrapped JavaScript object.
    pub fn object(&self) -> &Object {
        &self.module
    }

    /// Expose `text` as `Module.pasted_text` for the module to pull.
    pub fn publish_pasted_text(&self, text: &str) -> WasmResult<()> {
        Reflect::set(
            &self.module,
            &JsValue::from_str(PASTED_TEXT),
            &JsValue::from_str(text),
        )?;
        Ok(())
    }

    /// Current value of `Module.pasted_text`, if set.
    pub fn pasted_text(&self) -> WasmResult<Option<String>> {
        Ok(Reflect::get(&self.module, &JsValue::from_str(PASTED_TEXT))?.as_string())
    }

    /// Install `Module.locateFile` so asset paths are used as given.
    pub fn install_locate_file(&self) -> WasmResult<()> {
        let passthrough = Closure::<dyn Fn(String) -> String>::new(|path: String| path);
        Reflect::set(
            &self.module,
            &JsValue::from_str("locateFile"),
            passthrough.as_ref(),
        )?;
        // Lives as long as the page.
        passthrough.forget();
        Ok(())
    }

    /// Create `root` and its parents in the module's virtual filesystem.
    pub fn ensure_vfs_root(&self, root: &str) -> WasmResult<()> {
        let fs = self.property("FS")?;
        let mkdir_tree = Reflect::get(&fs, &JsValue::from_str("mkdirTree"))?
            .dyn_into::<Function>()
            .map_err(|_| WasmError::MissingExport("FS.mkdirTree".to_string()))?;
        mkdir_tree.call1(&fs, &JsValue::from_str(root))?;
        debug!(root, "virtual filesystem root ready");
        Ok(())
    }

    fn property(&self, name: &str) -> WasmResult<JsValue> {
        let value = Reflect::get(&self.module, &JsValue::from_str(name))?;
        if value.is_undefined() || value.is_null() {
            return Err(WasmError::MissingExport(name.to_string()));
        }
        Ok(value)
    }

    /// `Module.ccall(name, returnType, argTypes, args)` for an exported C function.
    fn ccall(
        &self,
        name: &str,
        return_type: Option<&str>,
        args: &[(&str, JsValue)],
    ) -> WasmResult<JsValue> {
        // Emscripten exports C symbols with a leading underscore.
        self.property(&format!("_{name}"))?;
        let ccall = self
            .property("ccall")?
            .dyn_into::<Function>()
            .map_err(|_| WasmError::MissingExport("ccall".to_string()))?;

        let arg_types: Array = args.iter().map(|(ty, _)| JsValue::from_str(ty)).collect();
        let arg_values: Array = args.iter().map(|(_, value)| value.clone()).collect();
        let return_type = return_type.map(JsValue::from_str).unwrap_or(JsValue::NULL);

        let call_args = Array::of4(
            &JsValue::from_str(name),
            &return_type,
            &arg_types,
            &arg_values,
        );
        Ok(Reflect::apply(&ccall, &self.module, &call_args)?)
    }
}

impl ModuleEntryPoints for EmscriptenModule {
    fn handle_text_input(&self, text: &str) -> Result<()> {
        self.ccall(
            "handle_text_input",
            None,
            &[("string", JsValue::from_str(text))],
        )?;
        Ok(())
    }

    fn set_drag_state(&self, active: bool) -> Result<()> {
        self.ccall(
            "set_drag_state",
            None,
            &[("number", JsValue::from(u32::from(active)))],
        )?;
        Ok(())
    }

    fn heap_malloc(&self, size: usize) -> Result<BufferHandle> {
        let address = self
            .ccall(
                "heap_malloc",
                Some("number"),
                &[("number", JsValue::from_f64(size as f64))],
            )?
            .as_f64()
            .ok_or_else(|| {
                BridgeError::OperationFailed("heap_malloc returned a non-number".to_string())
            })?;
        Ok(BufferHandle::new(address as u32))
    }

    fn heap_write(&self, handle: BufferHandle, bytes: &[u8]) -> Result<()> {
        let heap = self
            .property("HEAPU8")?
            .dyn_into::<Uint8Array>()
            .map_err(|_| WasmError::MissingExport("HEAPU8".to_string()))?;

        let end = handle.address() as u64 + bytes.len() as u64;
        if end > heap.length() as u64 {
            return Err(BridgeError::OperationFailed(format!(
                "write of {} bytes at {} exceeds module memory",
                bytes.len(),
                handle
            )));
        }
        heap.set(&Uint8Array::from(bytes), handle.address());
        Ok(())
    }

    fn handle_file_drop(&self, filename: &str, length: usize, handle: BufferHandle) -> Result<()> {
        self.ccall(
            "handle_file_drop",
            None,
            &[
                ("string", JsValue::from_str(filename)),
                ("number", JsValue::from_f64(length as f64)),
                ("number", JsValue::from(handle.address())),
            ],
        )?;
        Ok(())
    }
}

impl KeyEventSink for EmscriptenModule {
    fn handle_key_event(&self, code: u32) -> Result<()> {
        self.ccall("handle_key_event", None, &[("number", JsValue::from(code))])?;
        Ok(())
    }
}
