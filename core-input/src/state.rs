//! Process-wide bridge state.
//!
//! Two values outlive individual events: the text of the last paste and
//! whether a drag is currently over the page. Both live in one
//! [`BridgeState`] shared by reference between the bridge and whoever reads
//! it on the module's behalf.
//!
//! Each field has exactly one writer inside this crate
//! ([`ClipboardCapture`](crate::clipboard::ClipboardCapture) for the pasted
//! text, [`DragStateTracker`](crate::drag::DragStateTracker) for the drag
//! flag). Readers are public.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Shared state read by the module on demand.
#[derive(Debug, Default)]
pub struct BridgeState {
    pasted_text: RwLock<String>,
    drag_active: AtomicBool,
}

impl BridgeState {
    /// Empty pasted text, no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text of the most recent paste, or `""` before the first one.
    pub fn pasted_text(&self) -> String {
        match self.pasted_text.read() {
            Ok(text) => text.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Whether a drag is currently over the page.
    pub fn drag_active(&self) -> bool {
        self.drag_active.load(Ordering::Acquire)
    }

    pub(crate) fn set_pasted_text(&self, text: String) {
        match self.pasted_text.write() {
            Ok(mut slot) => *slot = text,
            Err(poisoned) => *poisoned.into_inner() = text,
        }
    }

    pub(crate) fn set_drag_active(&self, active: bool) {
        self.drag_active.store(active, Ordering::Release);
    }
}
