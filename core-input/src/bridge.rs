//! The assembled input bridge.
//!
//! [`InputBridge`] owns one of each component, the shared [`BridgeState`],
//! and the [`EventTable`] that routes host events to them.
//!
//! ```ignore
//! use core_input::{HostEvent, InputBridge};
//! use core_input::events::ClipboardPayload;
//!
//! let bridge = InputBridge::builder()
//!     .module(module)
//!     .surface(surface)
//!     .build()?;
//!
//! let dispatched = bridge.dispatch(HostEvent::Paste(ClipboardPayload::text("hi")));
//! assert!(dispatched.prevents_default());
//! assert_eq!(bridge.state().pasted_text(), "hi");
//! ```

use std::sync::Arc;

use bridge_traits::module::{KeyEventSink, ModuleEntryPoints};
use core_runtime::config::BridgeConfig;
use core_runtime::error::{Error, Result};

use crate::clipboard::ClipboardCapture;
use crate::dispatch::{Dispatched, EventTable};
use crate::drag::DragStateTracker;
use crate::events::HostEvent;
use crate::file_drop::FileDropIngestor;
use crate::keyboard::KeyTranslator;
use crate::state::BridgeState;
use crate::text_input::{EditableSurface, TextInputNormalizer};

pub struct InputBridge {
    config: BridgeConfig,
    state: Arc<BridgeState>,
    normalizer: TextInputNormalizer,
    clipboard: ClipboardCapture,
    drag_tracker: DragStateTracker,
    ingestor: Arc<FileDropIngestor>,
    key_translator: Option<KeyTranslator>,
    table: EventTable,
}

impl InputBridge {
    pub fn builder() -> InputBridgeBuilder {
        InputBridgeBuilder::default()
    }

    /// Route one host event to its handler.
    pub fn dispatch(&self, event: HostEvent) -> Dispatched {
        self.table.dispatch(self, event)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Shared state read by the module.
    pub fn state(&self) -> &Arc<BridgeState> {
        &self.state
    }

    pub fn normalizer(&self) -> &TextInputNormalizer {
        &self.normalizer
    }

    pub fn clipboard(&self) -> &ClipboardCapture {
        &self.clipboard
    }

    pub fn drag_tracker(&self) -> &DragStateTracker {
        &self.drag_tracker
    }

    pub fn ingestor(&self) -> &Arc<FileDropIngestor> {
        &self.ingestor
    }

    pub fn key_translator(&self) -> Option<&KeyTranslator> {
        self.key_translator.as_ref()
    }

    pub fn table(&self) -> &EventTable {
        &self.table
    }
}

/// Builder for [`InputBridge`].
///
/// The module and the editable surface are required. A key sink is required
/// only when the config enables keyboard events.
#[derive(Default)]
pub struct InputBridgeBuilder {
    config: Option<BridgeConfig>,
    state: Option<Arc<BridgeState>>,
    module: Option<Arc<dyn ModuleEntryPoints>>,
    surface: Option<Arc<dyn EditableSurface>>,
    key_sink: Option<Arc<dyn KeyEventSink>>,
}

impl InputBridgeBuilder {
    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share an existing state instead of creating a fresh one.
    pub fn state(mut self, state: Arc<BridgeState>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn module(mut self, module: Arc<dyn ModuleEntryPoints>) -> Self {
        self.module = Some(module);
        self
    }

    pub fn surface(mut self, surface: Arc<dyn EditableSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn key_sink(mut self, sink: Arc<dyn KeyEventSink>) -> Self {
        self.key_sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<InputBridge> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let module = self.module.ok_or_else(|| {
            Error::capability_missing(
                "ModuleEntryPoints",
                "The bridge needs the module's exported entry points. \
                 Web: pass the Emscripten Module object to bridge_wasm::install.",
            )
        })?;

        let surface = self.surface.ok_or_else(|| {
            Error::capability_missing(
                "EditableSurface",
                format!(
                    "Committed text is staged in an editable surface. \
                     Web: add a contenteditable element with id '{}'.",
                    config.text_surface_id
                ),
            )
        })?;

        let key_translator = match (config.keyboard_events, self.key_sink) {
            (true, Some(sink)) => Some(KeyTranslator::new(sink)),
            (true, None) => {
                return Err(Error::capability_missing(
                    "KeyEventSink",
                    "Keyboard events are enabled but no KeyEventSink was provided. \
                     Disable keyboard_events or inject a sink.",
                ))
            }
            (false, _) => None,
        };

        let table = if key_translator.is_some() {
            EventTable::with_keyboard()
        } else {
            EventTable::standard()
        };

        let state = self.state.unwrap_or_default();

        Ok(InputBridge {
            normalizer: TextInputNormalizer::new(Arc::clone(&module), surface),
            clipboard: ClipboardCapture::new(Arc::clone(&state)),
            drag_tracker: DragStateTracker::new(Arc::clone(&state), Arc::clone(&module)),
            ingestor: Arc::new(FileDropIngestor::new(
                Arc::clone(&module),
                config.max_transfer_bytes,
            )),
            key_translator,
            table,
            state,
            config,
        })
    }
}
