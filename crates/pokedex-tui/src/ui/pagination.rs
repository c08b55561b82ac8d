//! Pagination bar widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use pokedex_core::PageToken;

use crate::theme::Theme;

/// A row of `<`, page tokens and `>`, centered in its area.
pub struct PaginationBar<'a> {
    tokens: &'a [PageToken],
    theme: &'a Theme,
    can_go_previous: bool,
    can_go_next: bool,
    disabled: bool,
}

impl<'a> PaginationBar<'a> {
    /// Create a new pagination bar for `tokens`.
    pub fn new(tokens: &'a [PageToken], theme: &'a Theme) -> Self {
        Self {
            tokens,
            theme,
            can_go_previous: false,
            can_go_next: false,
            disabled: false,
        }
    }

    /// Set which arrows are active.
    pub fn arrows(mut self, can_go_previous: bool, can_go_next: bool) -> Self {
        self.can_go_previous = can_go_previous;
        self.can_go_next = can_go_next;
        self
    }

    /// Render every control dimmed (navigation blocked).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the line of spans for this bar.
    pub fn line(&self) -> Line<'static> {
        let arrow_style = |active: bool| {
            if active && !self.disabled {
                self.theme.page_arrow
            } else {
                self.theme.page_disabled
            }
        };

        let mut spans = Vec::with_capacity(self.tokens.len() * 2 + 3);
        spans.push(Span::styled(" < ", arrow_style(self.can_go_previous)));

        for token in self.tokens {
            let style = match token {
                PageToken::Page { current: true, .. } => self.theme.page_current,
                _ if self.disabled => self.theme.page_disabled,
                PageToken::Page { .. } => self.theme.page_number,
                PageToken::Ellipsis => self.theme.ellipsis,
            };
            let text = match token {
                PageToken::Page { number, .. } => format!(" {number} "),
                PageToken::Ellipsis => " … ".to_string(),
            };
            spans.push(Span::styled(text, style));
        }

        spans.push(Span::styled(" > ", arrow_style(self.can_go_next)));
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = self.line();
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_line(x, y, &line, area.width.saturating_sub(x - area.x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::page_window;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_tokens_centered() {
        let theme = Theme::dark();
        let tokens = page_window(7, 20, 2);
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        PaginationBar::new(&tokens, &theme)
            .arrows(true, true)
            .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert_eq!(text.trim(), "<  1  …  5  6  7  8  9  …  20  >");
    }

    #[test]
    fn test_current_page_is_highlighted() {
        let theme = Theme::dark();
        let tokens = page_window(2, 3, 2);
        let bar = PaginationBar::new(&tokens, &theme);
        let line = bar.line();

        let current: Vec<_> = line
            .spans
            .iter()
            .filter(|span| span.style == theme.page_current)
            .map(|span| span.content.trim().to_string())
            .collect();
        assert_eq!(current, vec!["2"]);
    }

    #[test]
    fn test_disabled_dims_arrows() {
        let theme = Theme::dark();
        let tokens = page_window(2, 3, 2);
        let line = PaginationBar::new(&tokens, &theme)
            .arrows(true, true)
            .disabled(true)
            .line();

        assert_eq!(line.spans[0].style, theme.page_disabled);
        assert_eq!(line.spans[line.spans.len() - 1].style, theme.page_disabled);
    }
}
