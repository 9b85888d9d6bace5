//! # Host Events
//!
//! Host-neutral descriptions of the browser events the bridge reacts to.
//! `bridge-wasm` builds these from DOM events; tests build them directly.
//!
//! | DOM event | [`HostEvent`] |
//! |-----------|---------------|
//! | `input` on the editable surface | `InputCommit` |
//! | `paste` | `Paste` |
//! | `dragenter` / `dragover` / `dragleave` / `drop` | `DragEnter` / `DragOver` / `DragLeave` / `Drop` |
//! | `keydown` / `keyup` | `KeyDown` / `KeyUp` |

use std::fmt;
use std::sync::Arc;

use bridge_traits::files::DroppedFile;

/// Discriminant used as the key of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    InputCommit,
    Paste,
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
    KeyDown,
    KeyUp,
}

/// One event delivered by the host.
pub enum HostEvent {
    /// The editable surface reported an `input` event.
    InputCommit(InputCommit),
    /// A paste happened anywhere in the document.
    Paste(ClipboardPayload),
    DragEnter,
    DragOver,
    DragLeave,
    /// Files were dropped, in the order the host listed them.
    Drop(Vec<Arc<dyn DroppedFile>>),
    KeyDown(KeyStroke),
    KeyUp(KeyStroke),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::InputCommit(_) => EventKind::InputCommit,
            Self::Paste(_) => EventKind::Paste,
            Self::DragEnter => EventKind::DragEnter,
            Self::DragOver => EventKind::DragOver,
            Self::DragLeave => EventKind::DragLeave,
            Self::Drop(_) => EventKind::Drop,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
        }
    }
}

impl fmt::Debug for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputCommit(commit) => f.debug_tuple("InputCommit").field(commit).finish(),
            Self::Paste(payload) => f.debug_tuple("Paste").field(payload).finish(),
            Self::DragEnter => f.write_str("DragEnter"),
            Self::DragOver => f.write_str("DragOver"),
            Self::DragLeave => f.write_str("DragLeave"),
            Self::Drop(files) => f
                .debug_struct("Drop")
                .field("files", &files.len())
                .finish(),
            Self::KeyDown(stroke) => f.debug_tuple("KeyDown").field(stroke).finish(),
            Self::KeyUp(stroke) => f.debug_tuple("KeyUp").field(stroke).finish(),
        }
    }
}

/// Classification of an `input` event's `inputType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Committed text: typing, an input method's final commit, OS-level
    /// text insertion or replacement.
    TextInsertion,
    /// An input method is still assembling text.
    Composition,
    /// Other insertions (line breaks, paragraphs, drag/drop, links).
    StructuralInsertion,
    Deletion,
    Formatting,
    History,
    Other,
}

impl InputKind {
    /// Classify a DOM `inputType` string.
    ///
    /// `insertCompositionText` only counts as committed text when the event
    /// is no longer composing.
    pub fn classify(input_type: &str, is_composing: bool) -> Self {
        match input_type {
            "insertText" | "insertReplacementText" => Self::TextInsertion,
            "insertCompositionText" if is_composing => Self::Composition,
            "insertCompositionText" => Self::TextInsertion,
            "historyUndo" | "historyRedo" => Self::History,
            t if t.starts_with("insert") => Self::StructuralInsertion,
            t if t.starts_with("delete") => Self::Deletion,
            t if t.starts_with("format") => Self::Formatting,
            _ => Self::Other,
        }
    }

    pub fn is_text_insertion(self) -> bool {
        matches!(self, Self::TextInsertion)
    }
}

/// An `input` event on the editable surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCommit {
    pub kind: InputKind,
    /// The event's `data`; absent for most non-insertion kinds.
    pub data: Option<String>,
}

impl InputCommit {
    pub fn new(kind: InputKind, data: Option<String>) -> Self {
        Self { kind, data }
    }

    /// Build from the raw DOM fields.
    pub fn from_dom(input_type: &str, is_composing: bool, data: Option<String>) -> Self {
        Self::new(InputKind::classify(input_type, is_composing), data)
    }

    /// Shorthand for a committed insertion of `text`.
    pub fn insert_text(text: impl Into<String>) -> Self {
        Self::new(InputKind::TextInsertion, Some(text.into()))
    }
}

/// Clipboard contents of a paste event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// `text/plain` representation; `None` when the clipboard has none.
    pub plain_text: Option<String>,
}

impl ClipboardPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            plain_text: Some(text.into()),
        }
    }

    /// A payload with no plain-text representation (images, files).
    pub fn non_text() -> Self {
        Self { plain_text: None }
    }
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A `keydown`/`keyup` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStroke {
    /// DOM `key` value (`"a"`, `"Escape"`, `"F5"`, ...).
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the browser run its default action.
    Default,
    /// Call `preventDefault()` on the native event.
    PreventDefault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_insertions() {
        assert_eq!(InputKind::classify("insertText", false), InputKind::TextInsertion);
        assert_eq!(
            InputKind::classify("insertReplacementText", false),
            InputKind::TextInsertion
        );
        assert_eq!(
            InputKind::classify("insertCompositionText", false),
            InputKind::TextInsertion
        );
        assert_eq!(
            InputKind::classify("insertCompositionText", true),
            InputKind::Composition
        );
        assert_eq!(
            InputKind::classify("insertParagraph", false),
            InputKind::StructuralInsertion
        );
    }

    #[test]
    fn test_classify_non_insertions() {
        assert_eq!(
            InputKind::classify("deleteContentBackward", false),
            InputKind::Deletion
        );
        assert_eq!(InputKind::classify("formatBold", false), InputKind::Formatting);
        assert_eq!(InputKind::classify("historyUndo", false), InputKind::History);
        assert_eq!(InputKind::classify("", false), InputKind::Other);
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(HostEvent::DragOver.kind(), EventKind::DragOver);
        assert_eq!(
            HostEvent::Paste(ClipboardPayload::non_text()).kind(),
            EventKind::Paste
        );
        assert_eq!(HostEvent::Drop(Vec::new()).kind(), EventKind::Drop);
    }
}
