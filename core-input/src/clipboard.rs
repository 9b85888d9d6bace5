//! Clipboard Capture
//!
//! Paste events never insert into the page. Their plain-text payload is kept
//! in [`BridgeState`] until the module asks for it.

use std::sync::Arc;

use tracing::debug;

use crate::events::ClipboardPayload;
use crate::state::BridgeState;

pub struct ClipboardCapture {
    state: Arc<BridgeState>,
}

impl ClipboardCapture {
    pub fn new(state: Arc<BridgeState>) -> Self {
        Self { state }
    }

    /// Store the payload's plain text, or `""` for non-text payloads.
    pub fn on_paste(&self, payload: ClipboardPayload) {
        let text = payload.plain_text.unwrap_or_default();
        debug!(bytes = text.len(), "paste captured");
        self.state.set_pasted_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_stored_exactly() {
        let state = Arc::new(BridgeState::new());
        let capture = ClipboardCapture::new(state.clone());

        capture.on_paste(ClipboardPayload::text("héllo wörld"));

        assert_eq!(state.pasted_text(), "héllo wörld");
    }

    #[test]
    fn test_non_text_payload_yields_empty() {
        let state = Arc::new(BridgeState::new());
        let capture = ClipboardCapture::new(state.clone());

        capture.on_paste(ClipboardPayload::text("before"));
        capture.on_paste(ClipboardPayload::non_text());

        assert_eq!(state.pasted_text(), "");
    }
}
