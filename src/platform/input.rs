//! Keyboard mapping
//!
//! Left player uses `w`/`s`, right player the arrow keys. Codes follow the
//! DOM `KeyboardEvent.key` names.

use crate::session::GameSession;
use crate::sim::state::{Key, Side};

/// A movement key bound to a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub side: Side,
    pub key: Key,
}

/// Map a key code to a paddle binding. Unknown codes map to `None`.
pub fn map_key(code: &str) -> Option<KeyBinding> {
    let (side, key) = match code {
        "w" | "W" => (Side::Left, Key::Up),
        "s" | "S" => (Side::Left, Key::Down),
        "ArrowUp" => (Side::Right, Key::Up),
        "ArrowDown" => (Side::Right, Key::Down),
        _ => return None,
    };
    Some(KeyBinding { side, key })
}

/// Forward a key press/release to the session. Unbound keys are ignored.
///
/// Returns whether the key was bound.
pub fn handle_key(session: &mut GameSession, code: &str, pressed: bool) -> bool {
    match map_key(code) {
        Some(binding) => {
            session.apply_input(binding.side, binding.key, pressed);
            true
        }
        None => false,
    }
}
