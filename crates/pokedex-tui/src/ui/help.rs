//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::event::{HelpSection, get_command_help, get_help_sections};
use crate::theme::Theme;

/// Help overlay showing key bindings and page prompt commands.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section_title(&self, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(self.theme.info)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn binding_line(&self, keys: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{keys:>18}"), self.theme.help_key),
            Span::styled(format!(" {description}"), self.theme.help_desc),
        ])
    }

    fn render_lines(lines: &[Line<'_>], area: Rect, buf: &mut Buffer) {
        for (line, y) in lines.iter().zip(area.y..area.y + area.height) {
            buf.set_line(area.x, y, line, area.width);
        }
    }

    fn section_lines(&self, sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for section in sections {
            lines.push(self.section_title(section.title));
            lines.extend(
                section
                    .bindings
                    .iter()
                    .map(|b| self.binding_line(b.keys, b.description)),
            );
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Centered popup area
        let popup_width = 76.min(area.width.saturating_sub(4));
        let popup_height = 18.min(area.height.saturating_sub(2));

        let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;

        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Help - Press ? or Esc to close ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let [left_col, right_col] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        // Left column: key bindings
        let left = self.section_lines(&get_help_sections());
        Self::render_lines(&left, left_col, buf);

        // Right column: page prompt reference
        let mut right = vec![self.section_title("Page prompt")];
        right.extend(
            get_command_help()
                .into_iter()
                .map(|(cmd, desc)| self.binding_line(cmd, desc)),
        );
        Self::render_lines(&right, right_col, buf);
    }
}
