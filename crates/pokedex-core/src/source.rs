//! Data-fetching collaborator trait.

use std::future::Future;

use crate::error::FetchError;
use crate::model::{CatalogPage, EntryDetail};

/// A paginated catalogue the list view reads from.
///
/// Implementations perform exactly one attempt per call. Cancellation is the
/// caller's business: dropping the returned future abandons the request.
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch page `page` (1-based) of `page_size` entries.
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<CatalogPage, FetchError>> + Send;

    /// Fetch the detail behind a [`CatalogEntry::detail_ref`](crate::CatalogEntry::detail_ref).
    fn fetch_detail(
        &self,
        detail_ref: &str,
    ) -> impl Future<Output = Result<EntryDetail, FetchError>> + Send;
}
