//! Main application state and logic.

mod commands;
mod constants;
mod fetching;
mod navigation;
mod render;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};

use pokedex_core::{CatalogEntry, CatalogPage, CatalogSource, FetchError, PaginationController};

use crate::TuiConfig;
use crate::event::KeyAction;
use crate::theme::{Theme, ThemeVariant};

use self::commands::{CommandAction, CommandInput, CommandKeyResult, parse_command};
use self::constants::{SPINNER_FRAMES, TICK_INTERVAL_MS};
use self::fetching::{FetchSlot, InFlight, recv_any, start_detail_fetch, start_page_fetch};
use self::navigation::{ListNavigator, SimpleListNav};
use self::render::{RenderContext, render_app};
use self::state::{AppMode, DetailState, FetchResult, UserSettings};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App<S: CatalogSource> {
    /// Where pages and details come from.
    source: Arc<S>,
    config: TuiConfig,
    controller: PaginationController,

    /// Entries of the page last loaded.
    entries: Vec<CatalogEntry>,
    /// Page the entries belong to.
    shown_page: u32,
    nav: SimpleListNav,
    detail: DetailState,

    /// Listing fetch in flight, and the page it is for.
    page_fetch: Option<(u32, InFlight)>,
    detail_fetch: Option<InFlight>,

    /// Page to jump to once the page count is known.
    pending_start_page: Option<u32>,

    error: Option<String>,
    message: Option<String>,
    mode: AppMode,
    theme: Theme,
    command_input: CommandInput,
    spinner_frame: usize,
    needs_redraw: bool,
}

impl<S: CatalogSource> App<S> {
    /// Create a new application. Nothing is fetched until [`App::start`].
    pub fn new(source: Arc<S>, config: TuiConfig) -> Self {
        let pending_start_page = (config.start_page > 1).then_some(config.start_page);
        let theme = Theme::from_variant(config.theme);

        Self {
            source,
            config,
            controller: PaginationController::new(),
            entries: Vec::new(),
            shown_page: 1,
            nav: SimpleListNav::default(),
            detail: DetailState::Idle,
            page_fetch: None,
            detail_fetch: None,
            pending_start_page,
            error: None,
            message: None,
            mode: AppMode::Normal,
            theme,
            command_input: CommandInput::default(),
            spinner_frame: 0,
            needs_redraw: true,
        }
    }

    /// Load the first page.
    pub fn start(&mut self) {
        self.request_page(1);
    }

    /// Run the application event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        self.start();

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_key(key_event);
                        }
                    }

                    // Drain any additional pending events
                    while crossterm::event::poll(Duration::ZERO)? {
                        if let Ok(Event::Key(key_event)) = crossterm::event::read() {
                            if key_event.kind == KeyEventKind::Press {
                                self.handle_key(key_event);
                                if self.mode == AppMode::Quit {
                                    break;
                                }
                            }
                        }
                    }
                    self.needs_redraw = true;
                }

                result = self.wait_for_fetch() => {
                    self.handle_fetch_result(result);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    self.on_tick();
                }
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Advance the spinner while something is loading.
    fn on_tick(&mut self) {
        if self.is_loading() || self.detail.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            self.needs_redraw = true;
        }
    }

    // ---- Input ----

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if KeyAction::from_key_event(key) == KeyAction::ForceQuit {
            self.mode = AppMode::Quit;
        } else if self.mode == AppMode::Command {
            self.handle_command_input(key);
        } else {
            self.handle_action(KeyAction::from_key_event(key));
        }
    }

    fn handle_command_input(&mut self, key: KeyEvent) {
        match self.command_input.handle_key(key) {
            CommandKeyResult::Continue => {}
            CommandKeyResult::Cancel => {
                self.command_input.clear();
                self.mode = AppMode::Normal;
            }
            CommandKeyResult::Execute(cmd) => {
                self.mode = AppMode::Normal;
                self.execute_command(&cmd);
            }
        }
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        self.message = None;

        if action == KeyAction::ForceQuit {
            self.mode = AppMode::Quit;
            return;
        }

        if self.mode == AppMode::Help {
            if matches!(
                action,
                KeyAction::ToggleHelp | KeyAction::Quit | KeyAction::Cancel
            ) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        match action {
            KeyAction::Quit => self.mode = AppMode::Quit,
            KeyAction::MoveUp => self.move_selection(<SimpleListNav as ListNavigator>::move_up),
            KeyAction::MoveDown => self.move_selection(<SimpleListNav as ListNavigator>::move_down),
            KeyAction::PreviousPage => {
                let page = self.controller.go_to_previous();
                self.follow(page);
            }
            KeyAction::NextPage => {
                let page = self.controller.go_to_next();
                self.follow(page);
            }
            KeyAction::FirstPage => {
                let page = self.controller.go_to_first();
                self.follow(page);
            }
            KeyAction::LastPage => {
                let page = self.controller.go_to_last();
                self.follow(page);
            }
            KeyAction::Refresh => self.refresh(),
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.set_theme(self.theme.toggle().variant),
            KeyAction::CommandMode => {
                self.command_input.clear();
                self.mode = AppMode::Command;
            }
            KeyAction::Cancel | KeyAction::ForceQuit | KeyAction::None => {}
        }
    }

    /// Execute a page prompt command.
    fn execute_command(&mut self, cmd: &str) {
        match parse_command(cmd) {
            CommandAction::None => {}
            CommandAction::Quit => self.mode = AppMode::Quit,
            CommandAction::Refresh => self.refresh(),
            CommandAction::ShowHelp => self.mode = AppMode::Help,
            CommandAction::GoToPage(page) => {
                let page = self.controller.go_to_page(page);
                self.follow(page);
            }
            CommandAction::FirstPage => self.handle_action(KeyAction::FirstPage),
            CommandAction::LastPage => self.handle_action(KeyAction::LastPage),
            CommandAction::NextPage => self.handle_action(KeyAction::NextPage),
            CommandAction::PreviousPage => self.handle_action(KeyAction::PreviousPage),
            CommandAction::SetTheme(variant) => {
                let variant = variant.unwrap_or_else(|| self.theme.toggle().variant);
                self.set_theme(variant);
            }
            CommandAction::Unknown(input) => {
                self.message = Some(format!("Unknown command: {input}"));
            }
        }
    }

    fn move_selection(&mut self, step: fn(&mut SimpleListNav)) {
        if self.is_loading() {
            return;
        }
        let before = self.nav.selection();
        step(&mut self.nav);
        if self.nav.selection() != before {
            self.request_detail();
        }
    }

    /// Reload the current page (retry after a failure).
    fn refresh(&mut self) {
        let page = self.controller.go_to_page(self.controller.current_page());
        self.follow(page);
    }

    fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme = Theme::from_variant(variant);

        if self.config.persist_settings {
            let mut settings = UserSettings::load();
            settings.theme = variant;
            if let Err(e) = settings.save() {
                tracing::warn!(error = %e, "Failed to save settings");
                self.message = Some(format!("Could not save theme: {e}"));
            }
        }
    }

    // ---- Fetching ----

    /// Start loading `page` if the controller signalled a change.
    fn follow(&mut self, page: Option<u32>) {
        if let Some(page) = page {
            self.request_page(page);
        }
    }

    /// Start loading `page`, superseding any fetch in flight.
    fn request_page(&mut self, page: u32) {
        tracing::info!(page, "Loading page");

        self.controller.set_disabled(true);
        self.error = None;
        self.detail_fetch = None;
        self.detail = DetailState::Idle;

        let inflight = start_page_fetch(
            Arc::clone(&self.source),
            page,
            self.config.pagination.page_size,
        );
        self.page_fetch = Some((page, inflight));
    }

    /// Start loading the detail of the highlighted entry.
    fn request_detail(&mut self) {
        let Some(detail_ref) = self.selected_entry().map(|e| e.detail_ref.clone()) else {
            self.detail_fetch = None;
            self.detail = DetailState::Idle;
            return;
        };

        self.detail = DetailState::Loading(detail_ref.clone());
        self.detail_fetch = Some(start_detail_fetch(Arc::clone(&self.source), detail_ref));
    }

    /// Wait for the next fetch in flight to finish.
    ///
    /// Never completes while nothing is in flight.
    pub async fn wait_for_fetch(&mut self) -> FetchResult {
        loop {
            let (slot, result) = recv_any(
                self.page_fetch.as_mut().map(|(_, inflight)| inflight),
                self.detail_fetch.as_mut(),
            )
            .await;

            if let Some(result) = result {
                return result;
            }
            self.fetch_lost(slot);
        }
    }

    /// A fetch task ended without a result.
    fn fetch_lost(&mut self, slot: FetchSlot) {
        tracing::warn!(?slot, "Fetch task ended without a result");
        match slot {
            FetchSlot::Page => {
                if let Some((page, _)) = self.page_fetch.take() {
                    self.controller.set_disabled(false);
                    self.entries.clear();
                    self.nav.set_count(0);
                    self.error = Some(format!("Failed to load page {page}"));
                }
            }
            FetchSlot::Detail => {
                self.detail_fetch = None;
                self.detail = DetailState::Failed("Failed to load details".to_string());
            }
        }
    }

    /// Apply a finished fetch. Results for superseded requests are dropped.
    pub fn handle_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Page { page, result } => {
                if self.page_fetch.as_ref().map(|(p, _)| *p) != Some(page) {
                    tracing::debug!(page, "Ignoring stale page result");
                    return;
                }
                self.page_fetch = None;
                self.controller.set_disabled(false);

                match result {
                    Ok(catalog_page) => self.page_loaded(page, catalog_page),
                    Err(e) => self.page_failed(page, &e),
                }
            }
            FetchResult::Detail { detail_ref, result } => {
                if self.detail != DetailState::Loading(detail_ref.clone()) {
                    tracing::debug!(detail_ref = %detail_ref, "Ignoring stale detail result");
                    return;
                }
                self.detail_fetch = None;

                self.detail = match result {
                    Ok(detail) => DetailState::Loaded(detail),
                    Err(e) => {
                        tracing::warn!(error = %e, "Detail fetch failed");
                        DetailState::Failed(format!("Could not load details: {e}"))
                    }
                };
            }
        }
    }

    fn page_loaded(&mut self, page: u32, catalog_page: CatalogPage) {
        let total_pages = self.config.pagination.total_pages(catalog_page.total_count);
        self.controller.set_total_pages(total_pages);

        tracing::info!(
            page,
            total_pages,
            entries = catalog_page.entries.len(),
            "Page loaded"
        );

        // Startup page or a page count that shrank under us
        let target = match self.pending_start_page.take() {
            Some(start) => self.controller.go_to_page(start),
            None if self.controller.current_page() != page => {
                Some(self.controller.current_page())
            }
            None => None,
        };
        if let Some(target) = target.filter(|&t| t != page) {
            self.request_page(target);
            return;
        }

        self.entries = catalog_page.entries;
        self.shown_page = page;
        self.nav.set_count(self.entries.len());
        self.nav.jump_to_top();
        self.request_detail();
    }

    fn page_failed(&mut self, page: u32, error: &FetchError) {
        tracing::warn!(page, error = %error, "Page fetch failed");
        self.entries.clear();
        self.nav.set_count(0);
        self.error = Some(format!("Failed to load page {page}: {error}"));
    }

    // ---- Accessors ----

    /// The 1-based page the controller is on.
    pub fn current_page(&self) -> u32 {
        self.controller.current_page()
    }

    /// Known page count (0 before the first load).
    pub fn total_pages(&self) -> u32 {
        self.controller.total_pages()
    }

    /// Check if a listing fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.page_fetch.is_some()
    }

    /// Check if navigation is blocked.
    pub fn is_navigation_disabled(&self) -> bool {
        self.controller.is_disabled()
    }

    /// Check if any fetch is in flight.
    pub fn has_pending_fetch(&self) -> bool {
        self.page_fetch.is_some() || self.detail_fetch.is_some()
    }

    /// Entries of the page on screen.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The highlighted entry.
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.nav.selection().and_then(|i| self.entries.get(i))
    }

    /// State of the detail card.
    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Error shown in place of the list.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient status message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current UI mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Active theme variant.
    pub fn theme_variant(&self) -> ThemeVariant {
        self.theme.variant
    }
}

impl<S: CatalogSource> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let window = self.config.pagination.window;
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            entries: &self.entries,
            selected: self.nav.selection(),
            offset: self.config.pagination.offset(self.shown_page),
            detail: &self.detail,
            current_page: self.controller.current_page(),
            total_pages: self.controller.total_pages(),
            tokens: self.controller.tokens(window),
            can_go_previous: self.controller.can_go_previous(),
            can_go_next: self.controller.can_go_next(),
            navigation_disabled: self.controller.is_disabled(),
            loading: self.is_loading(),
            error: self.error.as_deref(),
            message: self.message.as_deref(),
            spinner: SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
            command_input: self.command_input.buffer(),
            command_cursor: self.command_input.cursor(),
        };

        render_app(&ctx, area, buf);
    }
}
