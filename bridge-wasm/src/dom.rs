//! DOM event conversion and listener lifetime.

use std::sync::Arc;

use bridge_traits::files::DroppedFile;
use core_input::events::{ClipboardPayload, InputCommit, InputKind, KeyStroke, Modifiers};
use core_input::{Dispatched, Disposition, EditableSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    ClipboardEvent, DragEvent, Event, EventTarget, HtmlElement, InputEvent, KeyboardEvent,
};

use crate::error::WasmResult;
use crate::files::BrowserFile;

/// The contenteditable element that stages committed text.
pub struct SurfaceElement {
    element: HtmlElement,
}

impl SurfaceElement {
    /// Wrap the surface element.
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl EditableSurface for SurfaceElement {
    fn clear(&self) {
        self.element.set_inner_html("");
    }
}

/// Build a commit from an `input` event.
///
/// Events that are not `InputEvent`s (synthetic `new Event("input")`) carry
/// no text and become an unclassified commit, so the surface is still cleared.
pub fn input_commit(event: &Event) -> InputCommit {
    match event.dyn_ref::<InputEvent>() {
        Some(input) => {
            InputCommit::from_dom(&input.input_type(), input.is_composing(), input.data())
        }
        None => InputCommit::new(InputKind::Other, None),
    }
}

/// The `text/plain` contents of a paste, if the event carries a clipboard.
pub fn clipboard_payload(event: &ClipboardEvent) -> ClipboardPayload {
    let plain_text = event
        .clipboard_data()
        .and_then(|data| data.get_data("text/plain").ok());
    ClipboardPayload { plain_text }
}

/// Dropped files in the order the browser lists them.
pub fn dropped_files(event: &DragEvent) -> Vec<Arc<dyn DroppedFile>> {
    let Some(list) = event.data_transfer().and_then(|data| data.files()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .map(|file| Arc::new(BrowserFile::new(file)) as Arc<dyn DroppedFile>)
        .collect()
}

/// Key name and modifiers of a `keydown`/`keyup` event.
pub fn key_stroke(event: &KeyboardEvent) -> KeyStroke {
    KeyStroke::new(
        event.key(),
        Modifiers {
            shift: event.shift_key(),
            control: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
    )
}

/// Cancel the browser's default action when dispatch asks for it.
pub fn apply_disposition(event: &Event, dispatched: &Dispatched) {
    if dispatched.disposition == Disposition::PreventDefault {
        event.prevent_default();
    }
}

/// An attached event listener. Dropping it detaches the listener.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `callback` to `target` for `event_type`.
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        callback: F,
    ) -> WasmResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// DOM event name this listener handles.
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
