//! Page bootstrap.
//!
//! [`install`] is the browser counterpart of the module's pre-initialization
//! hook: it prepares the `Module` globals, builds the [`InputBridge`] and
//! attaches it to the document. Workers have no document, so nothing is
//! installed there.
//!
//! GL context creation stays with the host page.

use std::rc::Rc;
use std::sync::Arc;

use core_input::{HostEvent, InputBridge};
use core_runtime::config::BridgeConfig;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::dom::{self, EventListener, SurfaceElement};
use crate::error::{WasmError, WasmResult};
use crate::module::EmscriptenModule;

/// A bridge attached to the page.
///
/// Listeners stay attached while this value is alive and are removed when it
/// is dropped.
pub struct InstalledBridge {
    bridge: Rc<InputBridge>,
    module: Arc<EmscriptenModule>,
    listeners: Vec<EventListener>,
}

impl InstalledBridge {
    /// The dispatching bridge.
    pub fn bridge(&self) -> &InputBridge {
        &self.bridge
    }

    /// The module the bridge delivers to.
    pub fn module(&self) -> &EmscriptenModule {
        &self.module
    }

    /// DOM event names with an attached listener.
    pub fn listened_events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(EventListener::event_type).collect()
    }
}

/// Install the input bridge on the current page.
///
/// Returns `Ok(None)` when there is no document (worker context).
pub fn install(
    module: EmscriptenModule,
    config: BridgeConfig,
) -> WasmResult<Option<InstalledBridge>> {
    let Some(window) = web_sys::window() else {
        debug!("no window; input bridge not installed");
        return Ok(None);
    };
    let Some(document) = window.document() else {
        debug!("no document; input bridge not installed");
        return Ok(None);
    };

    config.validate()?;

    module.publish_pasted_text("")?;
    module.install_locate_file()?;
    if let Some(root) = &config.vfs_root {
        module.ensure_vfs_root(root)?;
    }

    let surface = document
        .get_element_by_id(&config.text_surface_id)
        .ok_or_else(|| WasmError::MissingElement(config.text_surface_id.clone()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| {
            WasmError::Unsupported(format!(
                "#{} is not an HTML element",
                config.text_surface_id
            ))
        })?;

    let module = Arc::new(module);
    let mut builder = InputBridge::builder()
        .config(config.clone())
        .module(module.clone())
        .surface(Arc::new(SurfaceElement::new(surface.clone())));
    if config.keyboard_events {
        builder = builder.key_sink(module.clone());
    }
    let bridge = Rc::new(builder.build()?);

    let document_target: &EventTarget = document.as_ref();
    let mut listeners = vec![
        route(&bridge, surface.as_ref(), "input", |event| {
            Some(HostEvent::InputCommit(dom::input_commit(event)))
        })?,
        mirror_paste(&bridge, &module, document_target)?,
        route(&bridge, document_target, "dragenter", |_| Some(HostEvent::DragEnter))?,
        route(&bridge, document_target, "dragover", |_| Some(HostEvent::DragOver))?,
        route(&bridge, document_target, "dragleave", |_| Some(HostEvent::DragLeave))?,
        route(&bridge, document_target, "drop", |event| {
            event
                .dyn_ref::<DragEvent>()
                .map(|drag| HostEvent::Drop(dom::dropped_files(drag)))
        })?,
    ];

    if config.keyboard_events {
        let window_target: &EventTarget = window.as_ref();
        listeners.push(route(&bridge, window_target, "keydown", |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| HostEvent::KeyDown(dom::key_stroke(key)))
        })?);
        listeners.push(route(&bridge, window_target, "keyup", |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| HostEvent::KeyUp(dom::key_stroke(key)))
        })?);
    }

    if config.focus_surface {
        surface.focus()?;
    }

    info!(
        surface = %config.text_surface_id,
        listeners = listeners.len(),
        "input bridge installed"
    );

    Ok(Some(InstalledBridge {
        bridge,
        module,
        listeners,
    }))
}

/// Listen for `event_type` and dispatch whatever `to_host` makes of it.
fn route<F>(
    bridge: &Rc<InputBridge>,
    target: &EventTarget,
    event_type: &'static str,
    to_host: F,
) -> WasmResult<EventListener>
where
    F: Fn(&Event) -> Option<HostEvent> + 'static,
{
    let bridge = Rc::clone(bridge);
    EventListener::new(target, event_type, move |event: Event| {
        if let Some(host_event) = to_host(&event) {
            let dispatched = bridge.dispatch(host_event);
            dom::apply_disposition(&event, &dispatched);
        }
    })
}

/// Paste listener that also copies the captured text to `Module.pasted_text`.
fn mirror_paste(
    bridge: &Rc<InputBridge>,
    module: &Arc<EmscriptenModule>,
    target: &EventTarget,
) -> WasmResult<EventListener> {
    let bridge = Rc::clone(bridge);
    let module = Arc::clone(module);
    EventListener::new(target, "paste", move |event: Event| {
        let Some(paste) = event.dyn_ref::<ClipboardEvent>() else {
            return;
        };
        let dispatched = bridge.dispatch(HostEvent::Paste(dom::clipboard_payload(paste)));
        dom::apply_disposition(&event, &dispatched);

        if let Err(err) = module.publish_pasted_text(&bridge.state().pasted_text()) {
            warn!(error = %err, "failed to publish pasted text");
        }
    })
}
