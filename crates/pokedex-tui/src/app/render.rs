//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use pokedex_core::{CatalogEntry, PageToken};

use crate::theme::Theme;
use crate::ui::{
    AppLayout, DetailCard, EntryList, HelpOverlay, LIST_TITLE, PagePrompt, PaginationBar,
};

use super::state::{AppMode, DetailState};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub entries: &'a [CatalogEntry],
    pub selected: Option<usize>,
    /// Catalogue position of the first entry on this page.
    pub offset: u32,
    pub detail: &'a DetailState,
    pub current_page: u32,
    pub total_pages: u32,
    pub tokens: Vec<PageToken>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub navigation_disabled: bool,
    pub loading: bool,
    pub error: Option<&'a str>,
    /// Transient status line (unknown command, saved theme).
    pub message: Option<&'a str>,
    pub spinner: &'a str,
    pub command_input: &'a str,
    pub command_cursor: usize,
}

impl RenderContext<'_> {
    fn selected_name(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(CatalogEntry::display_name)
    }
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);
    render_list(ctx, layout.list, buf);
    if let Some(detail_area) = layout.detail {
        DetailCard::new(ctx.detail, ctx.theme)
            .fallback_name(ctx.selected_name())
            .spinner(ctx.spinner)
            .render(detail_area, buf);
    }
    render_pagination(ctx, layout.pagination, buf);

    match ctx.mode {
        AppMode::Command => {
            PagePrompt::new(ctx.theme, ctx.command_input, ctx.command_cursor)
                .render(layout.footer, buf);
        }
        _ => render_footer(ctx, layout.footer, buf),
    }

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(" pokedex ", ctx.theme.title.add_modifier(Modifier::BOLD));

    let stats = if ctx.total_pages > 0 {
        format!(
            " page {} of {}, {} shown ",
            ctx.current_page,
            ctx.total_pages,
            ctx.entries.len()
        )
    } else {
        String::new()
    };
    let stats_span = Span::styled(stats, ctx.theme.header);

    let status = if let Some(err) = ctx.error {
        Span::styled(format!(" {err} "), Style::default().fg(ctx.theme.error))
    } else if ctx.loading {
        Span::styled(format!(" {} Loading ", ctx.spinner), ctx.theme.spinner)
    } else if let Some(msg) = ctx.message {
        Span::styled(format!(" {msg} "), Style::default().fg(ctx.theme.warning))
    } else {
        Span::raw("")
    };

    Paragraph::new(Line::from(vec![title, stats_span, status]))
        .style(ctx.theme.header)
        .render(area, buf);
}

fn render_list(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    if !ctx.loading && ctx.error.is_none() && !ctx.entries.is_empty() {
        EntryList::new(ctx.entries, ctx.theme)
            .selected(ctx.selected)
            .offset(ctx.offset)
            .render(area, buf);
        return;
    }

    // Placeholder in place of the list
    let block = Block::default()
        .title(LIST_TITLE)
        .title_style(ctx.theme.title)
        .borders(Borders::ALL)
        .border_style(ctx.theme.border);

    let lines = if ctx.loading {
        vec![Line::from(Span::styled(
            format!("{} Loading…", ctx.spinner),
            ctx.theme.spinner,
        ))]
    } else if let Some(err) = ctx.error {
        vec![
            Line::from(Span::styled(err.to_string(), Style::default().fg(ctx.theme.error))),
            Line::default(),
            Line::from(Span::styled("press r to retry", Style::default().fg(ctx.theme.muted))),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No entries on this page",
            Style::default().fg(ctx.theme.muted),
        ))]
    };

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_pagination(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(ctx.theme.border);
    let inner = block.inner(area);
    block.render(area, buf);

    // No bar until the page count is known
    if ctx.total_pages == 0 {
        return;
    }

    PaginationBar::new(&ctx.tokens, ctx.theme)
        .arrows(ctx.can_go_previous, ctx.can_go_next)
        .disabled(ctx.navigation_disabled)
        .render(inner, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let mut keys: Vec<(&str, &str)> = vec![("j/k", "Nav"), ("h/l", "Page"), ("g/G", "First/Last")];

    if ctx.error.is_some() {
        keys.push(("r", "Retry"));
    } else {
        keys.push(("r", "Reload"));
    }
    keys.extend([(":", "Go to"), ("t", "Theme"), ("?", "Help"), ("q", "Quit")]);

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {key} "), ctx.theme.help_key),
                Span::styled(format!("{desc} "), ctx.theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::page_window;

    fn context<'a>(theme: &'a Theme, entries: &'a [CatalogEntry], detail: &'a DetailState) -> RenderContext<'a> {
        RenderContext {
            mode: AppMode::Normal,
            theme,
            entries,
            selected: Some(0),
            offset: 0,
            detail,
            current_page: 1,
            total_pages: 3,
            tokens: page_window(1, 3, 2),
            can_go_previous: false,
            can_go_next: true,
            navigation_disabled: false,
            loading: false,
            error: None,
            message: None,
            spinner: "*",
            command_input: "",
            command_cursor: 0,
        }
    }

    fn screen(ctx: &RenderContext) -> String {
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render_app(ctx, area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_list_and_bar() {
        let theme = Theme::dark();
        let entries = vec![CatalogEntry::new("bulbasaur", "ref/1")];
        let detail = DetailState::Idle;
        let text = screen(&context(&theme, &entries, &detail));

        assert!(text.contains("page 1 of 3"));
        assert!(text.contains("Bulbasaur"));
        assert!(text.contains("<  1  2  3  >"));
    }

    #[test]
    fn test_no_bar_without_pages() {
        let theme = Theme::dark();
        let detail = DetailState::Idle;
        let mut ctx = context(&theme, &[], &detail);
        ctx.total_pages = 0;
        ctx.tokens = Vec::new();
        ctx.loading = true;

        let text = screen(&ctx);
        assert!(!text.contains(" < "));
        assert!(text.contains("* Loading…"));
    }

    #[test]
    fn test_error_replaces_list() {
        let theme = Theme::dark();
        let entries = vec![CatalogEntry::new("bulbasaur", "ref/1")];
        let detail = DetailState::Idle;
        let mut ctx = context(&theme, &entries, &detail);
        ctx.error = Some("Failed to load page 2");

        let text = screen(&ctx);
        assert!(text.contains("press r to retry"));
        assert!(text.contains(LIST_TITLE));
        assert!(!text.contains("Bulbasaur"));
    }
}
