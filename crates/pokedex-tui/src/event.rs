//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // List navigation
    MoveUp,
    MoveDown,

    // Page navigation
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,

    // Data
    /// Reload the current page (also retries after a failure).
    Refresh,

    // UI toggles
    ToggleHelp,
    ToggleTheme,
    CommandMode,

    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // List navigation - vim style and arrows
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Page navigation
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::PreviousPage,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::NextPage,
            (KeyCode::Char(','), KeyModifiers::NONE) => KeyAction::PreviousPage,
            (KeyCode::Char('.'), KeyModifiers::NONE) => KeyAction::NextPage,
            (KeyCode::Left, _) => KeyAction::PreviousPage,
            (KeyCode::Right, _) => KeyAction::NextPage,
            (KeyCode::PageUp, _) => KeyAction::PreviousPage,
            (KeyCode::PageDown, _) => KeyAction::NextPage,

            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::FirstPage,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::LastPage,
            (KeyCode::Char('G'), KeyModifiers::NONE) => KeyAction::LastPage,
            (KeyCode::Home, _) => KeyAction::FirstPage,
            (KeyCode::End, _) => KeyAction::LastPage,

            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,
            (KeyCode::Char('R'), KeyModifiers::SHIFT) => KeyAction::Refresh,

            // UI toggles
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            // Page prompt
            (KeyCode::Char(':'), KeyModifiers::NONE) => KeyAction::CommandMode,
            (KeyCode::Char(':'), KeyModifiers::SHIFT) => KeyAction::CommandMode,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "List",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move down/up" },
                KeyBinding { keys: "r", description: "Reload page / retry" },
            ],
        },
        HelpSection {
            title: "Pages",
            bindings: vec![
                KeyBinding { keys: "h/l ←/→", description: "Previous/next page" },
                KeyBinding { keys: ",/.", description: "Previous/next page" },
                KeyBinding { keys: "g/G", description: "First/last page" },
                KeyBinding { keys: ":", description: "Go to page" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

/// Get page prompt commands for help display.
pub fn get_command_help() -> Vec<(&'static str, &'static str)> {
    vec![
        (":<n> :page <n>", "Go to page n"),
        (":first :last", "First/last page"),
        (":next :prev", "Next/previous page"),
        (":refresh :r", "Reload page"),
        (":theme dark|light", "Set theme"),
        (":help", "Show help"),
        (":q :quit", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            KeyAction::NextPage
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Left, KeyModifiers::NONE)),
            KeyAction::PreviousPage
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            KeyAction::LastPage
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }
}
