//! Page-window calculation for pagination controls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of pages shown on each side of the current page.
pub const DEFAULT_WINDOW: u32 = 2;

/// A single renderable pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageToken {
    /// A clickable page number.
    Page {
        /// 1-based page number.
        number: u32,
        /// Whether this is the page currently shown.
        current: bool,
    },
    /// A gap between the first/last shortcut and the central window.
    Ellipsis,
}

impl PageToken {
    /// Create a page token, marked current iff `number == current_page`.
    pub fn page(number: u32, current_page: u32) -> Self {
        Self::Page {
            number,
            current: number == current_page,
        }
    }

    /// Page number, or `None` for an ellipsis.
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Check if this token is the current page.
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { current: true, .. })
    }

    /// Check if this token is an ellipsis.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page {
                number,
                current: true,
            } => write!(f, "[{number}]"),
            Self::Page { number, .. } => write!(f, "{number}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Compute the pagination controls to render, left to right.
///
/// `window` is the number of pages shown on each side of the current page.
/// When every page fits in a full window (`total_pages <= 2 * window + 1`)
/// all pages are listed without ellipses. Otherwise the first page and an
/// ellipsis lead when page 1 is outside the window, and an ellipsis and the
/// last page trail when the last page is outside the window.
///
/// `current_page` is clamped into `1..=total_pages`. Zero pages produce an
/// empty sequence.
pub fn page_window(current_page: u32, total_pages: u32, window: u32) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);

    if total_pages <= window.saturating_mul(2).saturating_add(1) {
        return (1..=total_pages)
            .map(|number| PageToken::page(number, current))
            .collect();
    }

    let mut tokens = Vec::with_capacity(window as usize * 2 + 5);

    if current > window.saturating_add(1) {
        tokens.push(PageToken::page(1, current));
        tokens.push(PageToken::Ellipsis);
    }

    let start = current.saturating_sub(window).max(1);
    let end = current.saturating_add(window).min(total_pages);
    tokens.extend((start..=end).map(|number| PageToken::page(number, current)));

    if current.saturating_add(window) < total_pages {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::page(total_pages, current));
    }

    tokens
}

/// Number of pages needed to show `total_count` items, `page_size` at a time.
pub fn total_pages_for(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
