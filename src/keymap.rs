use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleFocus,
    FocusProblem,
    FocusEditor,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,
    None,
}

impl KeyAction {
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => KeyAction::Quit,
                KeyCode::Char('w') => KeyAction::ToggleFocus,
                KeyCode::Char('d') => KeyAction::PageDown,
                KeyCode::Char('u') => KeyAction::PageUp,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Tab => KeyAction::ToggleFocus,
            KeyCode::Char('h') | KeyCode::Left => KeyAction::FocusProblem,
            KeyCode::Char('l') | KeyCode::Right => KeyAction::FocusEditor,
            KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
            KeyCode::PageDown => KeyAction::PageDown,
            KeyCode::PageUp => KeyAction::PageUp,
            KeyCode::Char('g') | KeyCode::Home => KeyAction::ScrollTop,
            KeyCode::Char('G') | KeyCode::End => KeyAction::ScrollBottom,
            _ => KeyAction::None,
        }
    }
}

pub const HELP_HINTS: &[&str] = &[
    "h/l: switch panes",
    "ctrl+w: toggle",
    "j/k: scroll",
    "g/G: top/bottom",
    "q: quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(KeyAction::from_key(&key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from_key(&ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn test_focus_bindings() {
        assert_eq!(KeyAction::from_key(&ctrl('w')), KeyAction::ToggleFocus);
        assert_eq!(KeyAction::from_key(&key(KeyCode::Tab)), KeyAction::ToggleFocus);
        assert_eq!(KeyAction::from_key(&key(KeyCode::Left)), KeyAction::FocusProblem);
        assert_eq!(KeyAction::from_key(&key(KeyCode::Char('l'))), KeyAction::FocusEditor);
    }

    #[test]
    fn test_scroll_bindings() {
        assert_eq!(KeyAction::from_key(&key(KeyCode::Char('j'))), KeyAction::ScrollDown);
        assert_eq!(KeyAction::from_key(&key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(KeyAction::from_key(&ctrl('d')), KeyAction::PageDown);
        assert_eq!(KeyAction::from_key(&key(KeyCode::End)), KeyAction::ScrollBottom);
        assert_eq!(
            KeyAction::from_key(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            KeyAction::ScrollBottom
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(KeyAction::from_key(&key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(KeyAction::from_key(&ctrl('q')), KeyAction::None);
        assert_eq!(KeyAction::from_key(&key(KeyCode::Enter)), KeyAction::None);
    }
}
