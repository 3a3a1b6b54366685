//! Location listing and exploration.
//!
//! `list_page` swallows failures into an empty page, while `explore`
//! reports them; the REPL relies on that difference.

use tracing::warn;

use crate::error::Result;
use crate::fetch::{CachedFetcher, Transport};
use crate::models::{LocationArea, LocationPage};

/// One listing page reduced to what navigation needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub names: Vec<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PageView {
    /// True for the result of a failed fetch (or a genuinely empty page).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.previous.is_none() && self.next.is_none()
    }
}

impl From<LocationPage> for PageView {
    fn from(page: LocationPage) -> Self {
        Self {
            names: page.results.into_iter().map(|entry| entry.name).collect(),
            previous: page.previous.filter(|cursor| !cursor.is_empty()),
            next: page.next.filter(|cursor| !cursor.is_empty()),
        }
    }
}

/// Cursors held by the caller between `map`/`mapb` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PaginationState {
    /// Cursor for a forward step; empty means the first page.
    pub fn forward(&self) -> &str {
        self.next.as_deref().unwrap_or_default()
    }

    /// Cursor for a backward step; empty means the first page.
    pub fn backward(&self) -> &str {
        self.previous.as_deref().unwrap_or_default()
    }

    /// Adopts the cursors of a fetched page. Empty pages are ignored so a
    /// failed fetch does not lose the current position.
    pub fn advance(&mut self, page: &PageView) {
        if page.is_empty() {
            return;
        }
        self.previous = page.previous.clone();
        self.next = page.next.clone();
    }
}

// == List Page ==
/// Fetches the listing page at `cursor`, or at `first_page` when `cursor`
/// is empty.
///
/// Fetch and decode failures are logged and yield an empty page.
pub async fn list_page<T: Transport>(
    fetcher: &CachedFetcher<T>,
    cursor: &str,
    first_page: &str,
) -> PageView {
    let url = if cursor.is_empty() { first_page } else { cursor };

    match fetcher.fetch_json::<LocationPage>(url).await {
        Ok(page) => page.into(),
        Err(e) => {
            warn!("Listing locations failed: {}", e);
            PageView::default()
        }
    }
}

// == Explore ==
/// Names of the Pokemon that can be encountered at `area_url`.
pub async fn explore<T: Transport>(fetcher: &CachedFetcher<T>, area_url: &str) -> Result<Vec<String>> {
    let area: LocationArea = fetcher.fetch_json(area_url).await?;
    Ok(area.pokemon_names())
}
