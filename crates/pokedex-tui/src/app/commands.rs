//! Page prompt handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::theme::ThemeVariant;

/// Page prompt input state.
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    buffer: String,
    cursor: usize,
}

impl CommandInput {
    /// Clear the input buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Get the current input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the cursor position (in characters).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Handle a key event, returning whether to execute the command.
    pub fn handle_key(&mut self, key: KeyEvent) -> CommandKeyResult {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                let cmd = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                CommandKeyResult::Execute(cmd)
            }
            (KeyCode::Esc, _) => {
                self.clear();
                CommandKeyResult::Cancel
            }
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let idx = self.byte_index(self.cursor);
                    self.buffer.remove(idx);
                    CommandKeyResult::Continue
                } else if self.buffer.is_empty() {
                    CommandKeyResult::Cancel
                } else {
                    CommandKeyResult::Continue
                }
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                CommandKeyResult::Continue
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
                CommandKeyResult::Continue
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear();
                CommandKeyResult::Continue
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let idx = self.byte_index(self.cursor);
                self.buffer.insert(idx, c);
                self.cursor += 1;
                CommandKeyResult::Continue
            }
            _ => CommandKeyResult::Continue,
        }
    }
}

/// Result of handling a key in command mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKeyResult {
    /// Continue accepting input.
    Continue,
    /// Leave command mode.
    Cancel,
    /// Execute the given command string.
    Execute(String),
}

/// Action to perform after executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// No action (empty input).
    None,
    Quit,
    Refresh,
    ShowHelp,
    /// Go to a page; clamped by the pagination controller.
    GoToPage(u32),
    FirstPage,
    LastPage,
    NextPage,
    PreviousPage,
    /// Set the theme, or toggle it when `None`.
    SetTheme(Option<ThemeVariant>),
    /// Input that is not a command.
    Unknown(String),
}

/// Parse a command string.
pub fn parse_command(cmd: &str) -> CommandAction {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return CommandAction::None;
    };

    // Bare number: `:12`
    if let Some(page) = parse_page(head) {
        return CommandAction::GoToPage(page);
    }

    match head {
        "q" | "quit" | "exit" => CommandAction::Quit,
        "r" | "refresh" | "reload" => CommandAction::Refresh,
        "help" | "?" => CommandAction::ShowHelp,

        "page" | "p" | "goto" => match parts.get(1).and_then(|arg| parse_page(arg)) {
            Some(page) => CommandAction::GoToPage(page),
            None => CommandAction::Unknown(cmd.trim().to_string()),
        },
        "first" => CommandAction::FirstPage,
        "last" => CommandAction::LastPage,
        "next" | "n" => CommandAction::NextPage,
        "prev" | "previous" => CommandAction::PreviousPage,

        "theme" | "t" => match parts.get(1) {
            None | Some(&"toggle") => CommandAction::SetTheme(None),
            Some(name) => match name.parse::<ThemeVariant>() {
                Ok(variant) => CommandAction::SetTheme(Some(variant)),
                Err(_) => CommandAction::Unknown(cmd.trim().to_string()),
            },
        },
        "dark" => CommandAction::SetTheme(Some(ThemeVariant::Dark)),
        "light" => CommandAction::SetTheme(Some(ThemeVariant::Light)),

        _ => CommandAction::Unknown(cmd.trim().to_string()),
    }
}

/// Parse a page number. Values past `u32::MAX` saturate; the controller
/// clamps them to the last page anyway.
fn parse_page(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse().unwrap_or(u32::MAX))
}
