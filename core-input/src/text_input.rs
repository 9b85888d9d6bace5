//! Text Input Normalizer
//!
//! Composed text (dead keys, compose sequences, ideographic input methods)
//! cannot be rebuilt from raw key presses. The host instead lets the browser
//! compose into a focused editable surface and reports each resulting
//! `input` event here. Only committed insertions reach the module; the
//! surface is emptied after every event so nothing staged is delivered
//! twice.

use std::sync::Arc;

use bridge_traits::module::ModuleEntryPoints;
use bridge_traits::platform::PlatformSendSync;
use tracing::{debug, warn};

use crate::events::InputCommit;

/// The focused element that stages in-progress composition.
pub trait EditableSurface: PlatformSendSync {
    /// Remove all staged content.
    fn clear(&self);
}

/// Result of handling one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Text was handed to `handle_text_input`.
    Forwarded,
    /// Not an insertion, or an insertion without data.
    Skipped,
    /// The module rejected or lacks the entry point; the text was dropped.
    Unavailable,
}

pub struct TextInputNormalizer {
    module: Arc<dyn ModuleEntryPoints>,
    surface: Arc<dyn EditableSurface>,
}

impl TextInputNormalizer {
    pub fn new(module: Arc<dyn ModuleEntryPoints>, surface: Arc<dyn EditableSurface>) -> Self {
        Self { module, surface }
    }

    /// Forward the commit if it is a text insertion, then clear the surface.
    pub fn on_commit(&self, commit: &InputCommit) -> CommitOutcome {
        let outcome = match (&commit.data, commit.kind.is_text_insertion()) {
            (Some(text), true) if !text.is_empty() => {
                match self.module.handle_text_input(text) {
                    Ok(()) => {
                        debug!(bytes = text.len(), "committed text forwarded");
                        CommitOutcome::Forwarded
                    }
                    Err(err) => {
                        warn!(error = %err, "handle_text_input failed; text dropped");
                        CommitOutcome::Unavailable
                    }
                }
            }
            _ => CommitOutcome::Skipped,
        };

        self.surface.clear();
        outcome
    }
}
