//! Event dispatch table.
//!
//! Maps each [`EventKind`] to the handler that owns it. Kinds without an
//! entry are ignored and leave the browser's default action in place.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use core_async::task::JoinHandle;
use tracing::trace;

use crate::bridge::InputBridge;
use crate::drag::DragTransition;
use crate::events::{Disposition, EventKind, HostEvent};
use crate::file_drop::DropReport;

/// Result of dispatching one event.
pub struct Dispatched {
    pub disposition: Disposition,
    /// Running ingestion for a drop event, if files were dropped.
    pub ingestion: Option<JoinHandle<DropReport>>,
}

impl Dispatched {
    fn new(disposition: Disposition) -> Self {
        Self {
            disposition,
            ingestion: None,
        }
    }

    pub fn ignored() -> Self {
        Self::new(Disposition::Default)
    }

    pub fn prevents_default(&self) -> bool {
        self.disposition == Disposition::PreventDefault
    }
}

impl fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatched")
            .field("disposition", &self.disposition)
            .field("ingestion", &self.ingestion.is_some())
            .finish()
    }
}

pub type Handler = fn(&InputBridge, HostEvent) -> Dispatched;

pub struct EventTable {
    handlers: HashMap<EventKind, Handler>,
}

impl EventTable {
    /// Table with the text, clipboard, drag and drop handlers.
    pub fn standard() -> Self {
        let mut table = Self {
            handlers: HashMap::new(),
        };
        table.register(EventKind::InputCommit, on_input_commit);
        table.register(EventKind::Paste, on_paste);
        table.register(EventKind::DragEnter, on_drag_enter);
        table.register(EventKind::DragOver, on_drag_over);
        table.register(EventKind::DragLeave, on_drag_leave);
        table.register(EventKind::Drop, on_drop);
        table
    }

    /// Standard table plus key handlers.
    pub fn with_keyboard() -> Self {
        let mut table = Self::standard();
        table.register(EventKind::KeyDown, on_key);
        table.register(EventKind::KeyUp, on_key);
        table
    }

    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    pub fn handles(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn dispatch(&self, bridge: &InputBridge, event: HostEvent) -> Dispatched {
        let kind = event.kind();
        match self.handlers.get(&kind) {
            Some(handler) => handler(bridge, event),
            None => {
                trace!(?kind, "no handler registered");
                Dispatched::ignored()
            }
        }
    }
}

fn on_input_commit(bridge: &InputBridge, event: HostEvent) -> Dispatched {
    if let HostEvent::InputCommit(commit) = event {
        bridge.normalizer().on_commit(&commit);
    }
    Dispatched::new(Disposition::Default)
}

fn on_paste(bridge: &InputBridge, event: HostEvent) -> Dispatched {
    if let HostEvent::Paste(payload) = event {
        bridge.clipboard().on_paste(payload);
    }
    Dispatched::new(Disposition::PreventDefault)
}

fn on_drag_enter(bridge: &InputBridge, _event: HostEvent) -> Dispatched {
    bridge.drag_tracker().transition(DragTransition::Enter);
    Dispatched::new(Disposition::PreventDefault)
}

// Browsers only fire `drop` on targets that cancel `dragover`. No state write.
fn on_drag_over(_bridge: &InputBridge, _event: HostEvent) -> Dispatched {
    Dispatched::new(Disposition::PreventDefault)
}

fn on_drag_leave(bridge: &InputBridge, _event: HostEvent) -> Dispatched {
    bridge.drag_tracker().transition(DragTransition::Leave);
    Dispatched::new(Disposition::Default)
}

fn on_drop(bridge: &InputBridge, event: HostEvent) -> Dispatched {
    bridge.drag_tracker().transition(DragTransition::Drop);

    let mut dispatched = Dispatched::new(Disposition::PreventDefault);
    if let HostEvent::Drop(files) = event {
        if !files.is_empty() {
            let ingestor = Arc::clone(bridge.ingestor());
            dispatched.ingestion =
                Some(core_async::spawn(async move { ingestor.ingest(files).await }));
        }
    }
    dispatched
}

fn on_key(bridge: &InputBridge, event: HostEvent) -> Dispatched {
    if let Some(keys) = bridge.key_translator() {
        match event {
            HostEvent::KeyDown(stroke) => {
                keys.on_key(&stroke, true);
            }
            HostEvent::KeyUp(stroke) => {
                keys.on_key(&stroke, false);
            }
            _ => {}
        }
    }
    Dispatched::new(Disposition::Default)
}
