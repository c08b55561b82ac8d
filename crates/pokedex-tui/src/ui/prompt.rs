//! Page prompt shown in the footer while in command mode.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::theme::Theme;

/// Single-line `:` prompt with a block cursor.
pub struct PagePrompt<'a> {
    theme: &'a Theme,
    input: &'a str,
    /// Cursor position in characters.
    cursor: usize,
}

impl<'a> PagePrompt<'a> {
    /// Create a new prompt widget.
    pub fn new(theme: &'a Theme, input: &'a str, cursor: usize) -> Self {
        Self {
            theme,
            input,
            cursor,
        }
    }
}

impl Widget for PagePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut spans = vec![Span::styled(
            ":",
            self.theme.command_prompt.add_modifier(Modifier::BOLD),
        )];

        if self.input.is_empty() {
            spans.push(Span::styled(" ", self.theme.command_cursor));
            spans.push(Span::styled(
                "page number or command (next, last, help...)",
                Style::default().fg(self.theme.muted),
            ));
        } else {
            let split = self
                .input
                .char_indices()
                .nth(self.cursor)
                .map_or(self.input.len(), |(i, _)| i);
            let (before, after) = self.input.split_at(split);
            spans.push(Span::styled(before.to_string(), self.theme.command_input));

            let mut rest = after.chars();
            match rest.next() {
                Some(c) => {
                    spans.push(Span::styled(c.to_string(), self.theme.command_cursor));
                    spans.push(Span::styled(rest.as_str().to_string(), self.theme.command_input));
                }
                None => spans.push(Span::styled(" ", self.theme.command_cursor)),
            }
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
