//! Global keyboard shortcuts.

use crate::core::browser::Direction;

/// Action bound to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Re-fetch the open file (Ctrl/Cmd+R).
    Refresh,
    /// Move through the file list (arrow keys).
    Navigate(Direction),
}

/// Map a `KeyboardEvent.key` value and modifier state to an action.
///
/// Right goes to the newer entry, left to the older one, matching the
/// newest-first order of the list.
pub fn key_action(key: &str, ctrl: bool, meta: bool) -> Option<KeyAction> {
    match key {
        "r" if ctrl || meta => Some(KeyAction::Refresh),
        "ArrowRight" => Some(KeyAction::Navigate(Direction::Newer)),
        "ArrowLeft" => Some(KeyAction::Navigate(Direction::Older)),
        _ => None,
    }
}

/// Whether key presses aimed at this tag belong to the element itself.
pub fn is_text_input(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_needs_modifier() {
        assert_eq!(key_action("r", true, false), Some(KeyAction::Refresh));
        assert_eq!(key_action("r", false, true), Some(KeyAction::Refresh));
        assert_eq!(key_action("r", false, false), None);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            key_action("ArrowRight", false, false),
            Some(KeyAction::Navigate(Direction::Newer))
        );
        assert_eq!(
            key_action("ArrowLeft", false, false),
            Some(KeyAction::Navigate(Direction::Older))
        );
        assert_eq!(key_action("ArrowUp", false, false), None);
    }

    #[test]
    fn test_text_inputs() {
        assert!(is_text_input("INPUT"));
        assert!(is_text_input("textarea"));
        assert!(!is_text_input("DIV"));
    }
}
