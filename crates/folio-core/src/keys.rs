/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMute,
    ToggleLamp,
    ToggleTheme,
    SkipIntro,
    NextView,
    PrevView,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "m" | "M" => Some(KeyAction::ToggleMute),
        "l" | "L" => Some(KeyAction::ToggleLamp),
        "t" | "T" => Some(KeyAction::ToggleTheme),
        "Escape" | "Enter" | " " => Some(KeyAction::SkipIntro),
        "ArrowRight" | "]" => Some(KeyAction::NextView),
        "ArrowLeft" | "[" => Some(KeyAction::PrevView),
        _ => None,
    }
}

/// Keys typed into form fields must not trigger shortcuts.
#[inline]
pub fn is_editable_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(action_for_key("m"), action_for_key("M"));
        assert_eq!(action_for_key("t"), Some(KeyAction::ToggleTheme));
        assert_eq!(action_for_key("x"), None);
    }

    #[test]
    fn form_fields_are_editable() {
        assert!(is_editable_tag("input"));
        assert!(is_editable_tag("TEXTAREA"));
        assert!(!is_editable_tag("DIV"));
    }
}
