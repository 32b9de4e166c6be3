//! Paginated catalog crawl
//!
//! Pages are requested one at a time, starting at 1. A page shorter than the
//! requested size is the last one; otherwise the crawl stops at the page cap.

use crate::adapters::vendor::CatalogSource;
use crate::domain::{Product, Result, SyncError};

/// Why the crawl ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A page returned fewer rows than requested
    ShortPage { page: u32, rows: usize },
    /// Every page up to the cap came back full
    PageCap { pages: u32 },
}

/// Products of one crawl, in API order
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub products: Vec<Product>,
    pub pages_fetched: u32,
    pub termination: Termination,
}

/// Fetch every in-stock product, up to `max_pages` pages of `page_size`
///
/// # Errors
///
/// Returns a validation error for a zero page size or page cap, and
/// propagates the first failing page request unchanged.
pub async fn fetch_all_in_stock(
    source: &dyn CatalogSource,
    page_size: u32,
    max_pages: u32,
) -> Result<FetchOutcome> {
    if page_size == 0 {
        return Err(SyncError::Validation("page_size must be > 0".to_string()));
    }
    if max_pages == 0 {
        return Err(SyncError::Validation("max_pages must be > 0".to_string()));
    }

    let mut products = Vec::new();

    for page in 1..=max_pages {
        let rows = source.read_page(page, page_size).await?;
        let count = rows.len();
        products.extend(rows);

        tracing::info!(page, rows = count, total = products.len(), "Fetched page");

        if count < page_size as usize {
            return Ok(FetchOutcome {
                products,
                pages_fetched: page,
                termination: Termination::ShortPage { page, rows: count },
            });
        }
    }

    tracing::warn!(
        max_pages,
        "Page cap reached with a full last page; catalog may be truncated"
    );

    Ok(FetchOutcome {
        products,
        pages_fetched: max_pages,
        termination: Termination::PageCap { pages: max_pages },
    })
}
