//! Drag State Tracker
//!
//! | Transition | DragActive |
//! |------------|------------|
//! | enter | true |
//! | leave | false |
//! | drop | false |
//!
//! `dragover` is not a transition; it fires on every pointer move and would
//! only rewrite the same value.

use std::sync::Arc;

use bridge_traits::module::ModuleEntryPoints;
use tracing::{debug, warn};

use crate::state::BridgeState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    Enter,
    Leave,
    Drop,
}

impl DragTransition {
    pub fn resulting_state(self) -> bool {
        matches!(self, Self::Enter)
    }
}

pub struct DragStateTracker {
    state: Arc<BridgeState>,
    module: Arc<dyn ModuleEntryPoints>,
}

impl DragStateTracker {
    pub fn new(state: Arc<BridgeState>, module: Arc<dyn ModuleEntryPoints>) -> Self {
        Self { state, module }
    }

    /// Apply the transition and report the new value to the module.
    ///
    /// The module is told on every transition, not only on change.
    pub fn transition(&self, transition: DragTransition) -> bool {
        let active = transition.resulting_state();
        self.state.set_drag_active(active);
        debug!(?transition, active, "drag state");

        if let Err(err) = self.module.set_drag_state(active) {
            warn!(error = %err, "set_drag_state failed");
        }
        active
    }
}
