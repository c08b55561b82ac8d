//! UI components and widgets.

mod detail_card;
mod entry_list;
mod help;
mod pagination;
mod prompt;

pub use detail_card::DetailCard;
pub use entry_list::EntryList;
pub use help::HelpOverlay;
pub use pagination::PaginationBar;
pub use prompt::PagePrompt;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Title of the list pane, shared by the list and its placeholders.
pub const LIST_TITLE: &str = " Pokemon list ";

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub detail: Option<Rect>,
    pub pagination: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let min_list_width = 28;
        let min_detail_width = 34;

        // Vertical split: header, content, pagination bar, footer
        let [header, content, pagination, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        // Detail card beside the list when there is room, otherwise list only
        let (list, detail) = if area.width >= min_list_width + min_detail_width {
            let [list, detail] = Layout::horizontal([
                Constraint::Percentage(40),
                Constraint::Percentage(60),
            ])
            .areas(content);
            (list, Some(detail))
        } else {
            (content, None)
        };

        Self {
            header,
            list,
            detail,
            pagination,
            footer,
        }
    }
}

/// Truncate `s` to at most `max_width` terminal columns, marking the cut
/// with an ellipsis.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("bulbasaur", 20), "bulbasaur");
        assert_eq!(truncate("bulbasaur", 5), "bulb…");
        assert_eq!(truncate("bulbasaur", 1), "…");
        assert_eq!(truncate("bulbasaur", 0), "");
    }

    #[test]
    fn test_layout_narrow_hides_detail() {
        let layout = AppLayout::new(Rect::new(0, 0, 40, 20));
        assert!(layout.detail.is_none());
        assert_eq!(layout.list.width, 40);

        let layout = AppLayout::new(Rect::new(0, 0, 100, 20));
        assert!(layout.detail.is_some());
        assert_eq!(layout.pagination.height, 3);
    }
}
