//! Pagination state and validated page navigation.

use crate::page::{PageToken, page_window};

/// Current page and page count of a paginated view.
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
}

impl PageState {
    /// State of a freshly created view: page 1, page count unknown.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }

    /// The 1-based page currently shown.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total number of pages (0 until the first page has been fetched).
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Highest page the current page may take.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the page state of a list view and validates navigation requests.
///
/// Navigation methods return the page-change signal: `Some(page)` when the
/// owning view should load `page`, `None` when the request was a no-op.
/// While disabled (typically while a fetch is in flight) every navigation
/// request is a no-op.
#[derive(Debug, Clone, Default)]
pub struct PaginationController {
    state: PageState,
    disabled: bool,
}

impl PaginationController {
    /// Create a controller on page 1 with no known pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// The 1-based page currently shown.
    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    /// Check if navigation is currently blocked.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Block or unblock navigation.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Update the page count after a fetch.
    ///
    /// The current page is pulled back inside the new bounds if the count
    /// shrank. This never signals a page change.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.state.total_pages = total_pages;
        let clamped = self.state.clamp(self.state.current_page);
        if clamped != self.state.current_page {
            tracing::debug!(
                from = self.state.current_page,
                to = clamped,
                "Current page clamped to new page count"
            );
            self.state.current_page = clamped;
        }
    }

    /// Check if a previous page exists and navigation is enabled.
    pub fn can_go_previous(&self) -> bool {
        !self.disabled && self.state.current_page > 1
    }

    /// Check if a next page exists and navigation is enabled.
    pub fn can_go_next(&self) -> bool {
        !self.disabled && self.state.current_page < self.state.total_pages
    }

    /// Move to the previous page.
    #[must_use = "the returned page must be loaded by the caller"]
    pub fn go_to_previous(&mut self) -> Option<u32> {
        if !self.can_go_previous() {
            return None;
        }
        self.state.current_page -= 1;
        Some(self.state.current_page)
    }

    /// Move to the next page.
    #[must_use = "the returned page must be loaded by the caller"]
    pub fn go_to_next(&mut self) -> Option<u32> {
        if !self.can_go_next() {
            return None;
        }
        self.state.current_page += 1;
        Some(self.state.current_page)
    }

    /// Jump to `page`, clamped into `1..=max(total_pages, 1)`.
    ///
    /// Jumping to the page already shown still signals, so the view reloads.
    #[must_use = "the returned page must be loaded by the caller"]
    pub fn go_to_page(&mut self, page: u32) -> Option<u32> {
        if self.disabled {
            return None;
        }
        let target = self.state.clamp(page);
        if target != page {
            tracing::debug!(requested = page, target, "Page request clamped");
        }
        self.state.current_page = target;
        Some(target)
    }

    /// Jump to the first page.
    #[must_use = "the returned page must be loaded by the caller"]
    pub fn go_to_first(&mut self) -> Option<u32> {
        self.go_to_page(1)
    }

    /// Jump to the last page.
    #[must_use = "the returned page must be loaded by the caller"]
    pub fn go_to_last(&mut self) -> Option<u32> {
        self.go_to_page(self.state.last_page())
    }

    /// Pagination controls for the current state.
    pub fn tokens(&self, window: u32) -> Vec<PageToken> {
        page_window(self.state.current_page, self.state.total_pages, window)
    }
}
