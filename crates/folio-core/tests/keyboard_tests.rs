// Host-side tests for the global keyboard shortcut table.

use folio_core::keys::{action_for_key, is_editable_tag, KeyAction};

#[test]
fn test_toggle_keys() {
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMute));
    assert_eq!(action_for_key("L"), Some(KeyAction::ToggleLamp));
    assert_eq!(action_for_key("T"), Some(KeyAction::ToggleTheme));
}

#[test]
fn test_intro_skip_keys() {
    for key in ["Escape", "Enter", " "] {
        assert_eq!(action_for_key(key), Some(KeyAction::SkipIntro), "{key:?}");
    }
}

#[test]
fn test_view_cycling_keys() {
    assert_eq!(action_for_key("ArrowRight"), Some(KeyAction::NextView));
    assert_eq!(action_for_key("]"), Some(KeyAction::NextView));
    assert_eq!(action_for_key("ArrowLeft"), Some(KeyAction::PrevView));
    assert_eq!(action_for_key("["), Some(KeyAction::PrevView));
}

#[test]
fn test_unmapped_keys() {
    for key in ["a", "1", "ArrowUp", "Shift", "", "mm"] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn test_editable_targets() {
    assert!(is_editable_tag("input"));
    assert!(is_editable_tag("Select"));
    assert!(!is_editable_tag("BUTTON"));
    assert!(!is_editable_tag("A"));
}
