//! Background catalogue fetches.
//!
//! Every fetch runs in its own task and owns a cancellation token. The
//! returned [`InFlight`] holds the token through a drop guard: replacing or
//! dropping the handle cancels the request, and a cancelled request sends
//! nothing.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};

use pokedex_core::CatalogSource;

use super::constants::FETCH_CHANNEL_SIZE;
use super::state::FetchResult;

/// Handle to a fetch running in the background.
#[derive(Debug)]
pub struct InFlight {
    rx: mpsc::Receiver<FetchResult>,
    _guard: DropGuard,
}

impl InFlight {
    fn spawn<F>(fetch: F) -> Self
    where
        F: Future<Output = FetchResult> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(FETCH_CHANNEL_SIZE);
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {}
                result = fetch => {
                    let _ = tx.send(result).await;
                }
            }
        });

        Self {
            rx,
            _guard: token.drop_guard(),
        }
    }

    /// Wait for the fetch result.
    ///
    /// Returns `None` if the task ended without a result.
    pub async fn recv(&mut self) -> Option<FetchResult> {
        self.rx.recv().await
    }
}

/// Start fetching listing page `page`.
pub fn start_page_fetch<S: CatalogSource>(source: Arc<S>, page: u32, page_size: u32) -> InFlight {
    tracing::debug!(page, page_size, "Starting page fetch");
    InFlight::spawn(async move {
        let result = source.fetch_page(page, page_size).await;
        FetchResult::Page { page, result }
    })
}

/// Start fetching the detail behind `detail_ref`.
pub fn start_detail_fetch<S: CatalogSource>(source: Arc<S>, detail_ref: String) -> InFlight {
    tracing::debug!(detail_ref = %detail_ref, "Starting detail fetch");
    InFlight::spawn(async move {
        let result = source.fetch_detail(&detail_ref).await;
        FetchResult::Detail { detail_ref, result }
    })
}

/// Which of the two fetch slots a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSlot {
    Page,
    Detail,
}

/// Wait on whichever fetches are in flight.
///
/// Pending forever when both slots are empty. A `None` result means the
/// task in that slot ended without sending (it panicked).
pub async fn recv_any(
    page: Option<&mut InFlight>,
    detail: Option<&mut InFlight>,
) -> (FetchSlot, Option<FetchResult>) {
    match (page, detail) {
        (None, None) => std::future::pending().await,
        (Some(page), None) => (FetchSlot::Page, page.recv().await),
        (None, Some(detail)) => (FetchSlot::Detail, detail.recv().await),
        (Some(page), Some(detail)) => tokio::select! {
            result = page.recv() => (FetchSlot::Page, result),
            result = detail.recv() => (FetchSlot::Detail, result),
        },
    }
}
