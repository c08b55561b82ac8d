//! Detail card for the highlighted entry.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use pokedex_core::EntryDetail;

use crate::app::state::DetailState;
use crate::theme::Theme;

/// Card showing name, sprite, types and measurements of one entry.
pub struct DetailCard<'a> {
    state: &'a DetailState,
    /// Name to show while the detail is still loading.
    fallback_name: Option<String>,
    spinner: &'a str,
    theme: &'a Theme,
}

impl<'a> DetailCard<'a> {
    /// Create a new detail card.
    pub fn new(state: &'a DetailState, theme: &'a Theme) -> Self {
        Self {
            state,
            fallback_name: None,
            spinner: "",
            theme,
        }
    }

    /// Heading used until the detail arrives.
    pub fn fallback_name(mut self, name: Option<String>) -> Self {
        self.fallback_name = name;
        self
    }

    /// Current loading spinner frame.
    pub fn spinner(mut self, frame: &'a str) -> Self {
        self.spinner = frame;
        self
    }

    fn detail_lines(&self, detail: &EntryDetail) -> Vec<Line<'static>> {
        let label = self.theme.card_label;
        let value = self.theme.card_value;

        vec![
            Line::from(Span::styled(
                detail.display_name.clone(),
                self.theme.card_heading,
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Sprite: ", label),
                Span::styled(
                    detail
                        .image_uri
                        .clone()
                        .unwrap_or_else(|| "none".to_string()),
                    Style::default().fg(self.theme.info),
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Type: ", label),
                Span::styled(detail.type_line(), value),
            ]),
            Line::from(vec![
                Span::styled("Height: ", label),
                Span::styled(format!("{},", detail.height), value),
                Span::styled(" Weight: ", label),
                Span::styled(detail.weight.to_string(), value),
            ]),
        ]
    }
}

impl Widget for DetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Details ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let heading = |name: &Option<String>| {
            Line::from(Span::styled(
                name.clone().unwrap_or_default(),
                self.theme.card_heading,
            ))
        };

        let lines = match self.state {
            DetailState::Idle => vec![Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(self.theme.muted),
            ))],
            DetailState::Loading(_) => vec![
                heading(&self.fallback_name),
                Line::default(),
                Line::from(Span::styled(
                    format!("{} Loading…", self.spinner),
                    self.theme.spinner,
                )),
            ],
            DetailState::Loaded(detail) => self.detail_lines(detail),
            DetailState::Failed(message) => vec![
                heading(&self.fallback_name),
                Line::default(),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(self.theme.error),
                )),
            ],
        };

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
