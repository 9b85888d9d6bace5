//! Key event translation.
//!
//! Only key presses are handled here; text is handled by the
//! [`TextInputNormalizer`](crate::text_input::TextInputNormalizer). Typing
//! "hællø" produces text commits, pressing [Alt]+[Æ] produces key events.
//!
//! A key code packs the key into the low 22 bits and flags above that:
//!
//! ```text
//!  bit 30      29..26   25    24   23     22     21..0
//! ┌────────┬────────┬──────┬─────┬──────┬───────┬──────────────────────────┐
//! │ IS_DOWN│ unused │ META │ ALT │ CTRL │ SHIFT │ codepoint or special key │
//! └────────┴────────┴──────┴─────┴──────┴───────┴──────────────────────────┘
//! ```
//!
//! Printable keys use their Unicode codepoint (at most 21 bits). Special keys
//! start above that at [`SPECIAL_KEY_BEGIN`].

use std::sync::Arc;

use bridge_traits::module::KeyEventSink;
use tracing::warn;

use crate::events::KeyStroke;

pub const SPECIAL_KEY_BEGIN: u32 = 1 << 21;

pub const MOD_SHIFT: u32 = 1 << 22;
pub const MOD_CONTROL: u32 = 1 << 23;
pub const MOD_ALT: u32 = 1 << 24;
pub const MOD_META: u32 = 1 << 25;
pub const KEY_IS_DOWN: u32 = 1 << 30;

/// Mask selecting the key part of a packed code.
pub const KEY_MASK: u32 = (1 << 22) - 1;

/// DOM `key` names of the special keys, in code order.
const SPECIAL_KEYS: &[&str] = &[
    "Escape",
    "Backspace",
    "Tab",
    "Enter",
    "Home",
    "End",
    "Insert",
    "Delete",
    "PageUp",
    "PageDown",
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "PrintScreen",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
    "F13",
    "F14",
    "F15",
    "F16",
    "F17",
    "F18",
    "F19",
    "F20",
    "F21",
    "F22",
    "F23",
    "F24",
    "Control",
    "Alt",
    "Shift",
    "Meta",
];

/// Code of a named special key, if the name is known.
pub fn special_key_code(name: &str) -> Option<u32> {
    SPECIAL_KEYS
        .iter()
        .position(|&known| known == name)
        .map(|idx| SPECIAL_KEY_BEGIN + 1 + idx as u32)
}

/// Key part of a code for a DOM `key` value, without flags.
///
/// Browsers report letter keys in the case produced by Shift, but the same
/// physical key must always map to the same code, so single codepoints are
/// uppercased when the uppercase form is itself a single codepoint.
pub fn key_code(key: &str) -> Option<u32> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let mut upper = c.to_uppercase();
            let code = match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            };
            Some(code as u32)
        }
        _ => special_key_code(key),
    }
}

/// Full packed code for a stroke, or `None` for unrecognised keys.
pub fn translate(stroke: &KeyStroke, is_down: bool) -> Option<u32> {
    let mut code = key_code(&stroke.key)?;

    let mods = stroke.modifiers;
    if mods.shift {
        code |= MOD_SHIFT;
    }
    if mods.control {
        code |= MOD_CONTROL;
    }
    if mods.alt {
        code |= MOD_ALT;
    }
    if mods.meta {
        code |= MOD_META;
    }
    if is_down {
        code |= KEY_IS_DOWN;
    }
    Some(code)
}

/// Forwards translated key strokes to a [`KeyEventSink`].
pub struct KeyTranslator {
    sink: Arc<dyn KeyEventSink>,
}

impl KeyTranslator {
    pub fn new(sink: Arc<dyn KeyEventSink>) -> Self {
        Self { sink }
    }

    /// Returns the delivered code, if the key was recognised and accepted.
    pub fn on_key(&self, stroke: &KeyStroke, is_down: bool) -> Option<u32> {
        let code = translate(stroke, is_down)?;
        match self.sink.handle_key_event(code) {
            Ok(()) => Some(code),
            Err(err) => {
                warn!(error = %err, "handle_key_event failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Modifiers;

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(key_code("a"), Some('A' as u32));
        assert_eq!(key_code("A"), Some('A' as u32));
        assert_eq!(key_code("æ"), Some('Æ' as u32));
        assert_eq!(key_code("1"), Some('1' as u32));
    }

    #[test]
    fn test_multi_char_uppercase_kept_as_is() {
        // 'ß' uppercases to "SS"
        assert_eq!(key_code("ß"), Some('ß' as u32));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(key_code("Escape"), Some(SPECIAL_KEY_BEGIN + 1));
        assert_eq!(key_code("Meta"), Some(SPECIAL_KEY_BEGIN + SPECIAL_KEYS.len() as u32));
        assert_eq!(key_code("F24"), special_key_code("F24"));
        assert_eq!(key_code("Dead"), None);
        assert_eq!(key_code(""), None);
    }

    #[test]
    fn test_modifier_and_press_flags() {
        let stroke = KeyStroke::new(
            "s",
            Modifiers {
                control: true,
                shift: true,
                ..Default::default()
            },
        );

        let down = translate(&stroke, true).unwrap();
        assert_eq!(down & KEY_MASK, 'S' as u32);
        assert_ne!(down & MOD_CONTROL, 0);
        assert_ne!(down & MOD_SHIFT, 0);
        assert_eq!(down & MOD_ALT, 0);
        assert_ne!(down & KEY_IS_DOWN, 0);

        let up = translate(&stroke, false).unwrap();
        assert_eq!(up & KEY_IS_DOWN, 0);
    }

    #[test]
    fn test_key_down_flag_is_bit_30() {
        let stroke = KeyStroke::new("a", Modifiers::default());

        let down = translate(&stroke, true).unwrap();
        assert_eq!(down, 'A' as u32 | (1 << 30));
        assert_eq!(down & (0b1111 << 26), 0);

        let up = translate(&stroke, false).unwrap();
        assert_eq!(up, 'A' as u32);
    }
}
