//! Entry list widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use pokedex_core::CatalogEntry;

use super::{LIST_TITLE, truncate};
use crate::theme::Theme;

/// The entries of the current page, one per row.
pub struct EntryList<'a> {
    entries: &'a [CatalogEntry],
    selected: Option<usize>,
    /// Position of the first entry in the whole catalogue (0-based).
    offset: u32,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list.
    pub fn new(entries: &'a [CatalogEntry], theme: &'a Theme) -> Self {
        Self {
            entries,
            selected: None,
            offset: 0,
            theme,
        }
    }

    /// Highlight the entry at `selected`.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Number rows starting after `offset`.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(LIST_TITLE)
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        for (row, entry) in self.entries.iter().enumerate() {
            let Ok(dy) = u16::try_from(row) else { break };
            if dy >= inner.height {
                break;
            }
            let y = inner.y + dy;

            let is_selected = self.selected == Some(row);
            let number = u64::from(self.offset) + row as u64 + 1;
            let marker = if is_selected { "▶" } else { " " };

            let number_span = Span::styled(
                format!("{marker} #{number:<5}"),
                Style::default().fg(self.theme.muted),
            );
            let name_width = width.saturating_sub(number_span.width());
            let name_span = Span::raw(truncate(&entry.display_name(), name_width));

            let line = Line::from(vec![number_span, name_span]);
            if is_selected {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), self.theme.selected);
            }
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
