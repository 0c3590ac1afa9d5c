//! Catalog aggregation: multi-page fetch, slug dedup, discovery sampling.
//!
//! The aggregator is stateless between calls. Each operation owns a fresh
//! accumulator for its lifetime, so no locking is needed anywhere here.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::constants::limits;
use crate::models::MovieSummary;
use crate::services::catalog_source::{
    CatalogSource, CategoryQuery, CategoryRef, SearchQuery, SourceError,
};

/// Failure of a whole aggregation operation.
///
/// Partial results are not errors: a fetch that loses a later page still
/// returns its accumulated items with [`Aggregate::complete`] set to false.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Bad caller input. Surfaced before any network request is made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The first upstream request failed, so there is no data to return.
    #[error("upstream catalog unavailable")]
    UpstreamUnavailable(#[source] SourceError),
}

/// The deduplicated, ordered result of one aggregation call.
#[derive(Debug, Default)]
pub struct Aggregate {
    /// First-seen order, unique slugs.
    pub items: Vec<MovieSummary>,
    /// False when a page failed, a draw was skipped, or the call was
    /// cancelled before all planned requests finished.
    pub complete: bool,
    /// Upstream requests that returned data.
    pub pages_fetched: u32,
}

/// Call-local slug accumulator. First occurrence of a slug wins; entries
/// with an empty slug are dropped.
#[derive(Debug, Default)]
struct Accumulator {
    items: Vec<MovieSummary>,
    seen: HashSet<String>,
}

impl Accumulator {
    fn merge_page(&mut self, page_items: Vec<MovieSummary>) {
        for movie in page_items {
            if movie.slug.is_empty() {
                continue;
            }
            if self.seen.insert(movie.slug.clone()) {
                self.items.push(movie);
            }
        }
    }
}

/// Fetches paginated listings from a [`CatalogSource`] and merges them into
/// stable, deduplicated aggregates.
#[derive(Clone)]
pub struct CatalogAggregator {
    source: Arc<dyn CatalogSource>,
}

impl CatalogAggregator {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetches up to `max_pages` pages of a category listing and merges them
    /// in page order, deduplicating by slug (first seen wins).
    ///
    /// Stops early once the upstream-reported `total_pages` is reached. A
    /// failed page after the first stops the loop and returns the partial
    /// aggregate; cancellation does the same.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] for an empty category id or zero
    ///   `page_size`/`max_pages`.
    /// - [`CatalogError::UpstreamUnavailable`] when page 1 itself fails.
    pub async fn fetch_by_category(
        &self,
        query: &CategoryQuery,
        page_size: u32,
        max_pages: u32,
        cancel: &CancellationToken,
    ) -> Result<Aggregate, CatalogError> {
        if query.category.id().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "category id must not be empty".to_string(),
            ));
        }
        if page_size == 0 || max_pages == 0 {
            return Err(CatalogError::InvalidArgument(
                "page_size and max_pages must be positive".to_string(),
            ));
        }

        let mut acc = Accumulator::default();
        let mut bound = max_pages;
        let mut page = 1;
        let mut complete = true;

        while page <= bound {
            let fetched = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!(category = %query.category, page, "category fetch cancelled");
                    complete = false;
                    break;
                }
                result = self.source.category_page(query, page, page_size) => result,
            };

            match fetched {
                Ok(fetched_page) => {
                    bound = bound.min(fetched_page.total_pages.max(1));
                    acc.merge_page(fetched_page.items);
                    page += 1;
                }
                Err(err) if page == 1 => {
                    return Err(CatalogError::UpstreamUnavailable(err));
                }
                Err(err) => {
                    warn!(category = %query.category, page, error = %err,
                        "page fetch failed, returning partial aggregate");
                    complete = false;
                    break;
                }
            }
        }

        Ok(Aggregate {
            items: acc.items,
            complete,
            pages_fetched: page - 1,
        })
    }

    /// Fetches a single page of keyword search results. No merge, no dedup.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] for a blank keyword or zero
    ///   `page`/`page_size`, before any request is made.
    /// - [`CatalogError::UpstreamUnavailable`] on any transport failure.
    pub async fn fetch_by_keyword(
        &self,
        query: &SearchQuery,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        if query.keyword.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "search keyword must not be blank".to_string(),
            ));
        }
        if page == 0 || page_size == 0 {
            return Err(CatalogError::InvalidArgument(
                "page and page_size must be positive".to_string(),
            ));
        }

        self.source
            .search_page(query, page, page_size)
            .await
            .map_err(CatalogError::UpstreamUnavailable)
    }

    /// Samples `draws` random (category, page) pairs from `pool`, fetching
    /// them concurrently and merging into a deduplicated pool of at most
    /// `draws * page_size` items.
    ///
    /// This trades completeness for variety: pages are drawn uniformly from
    /// 1..=[`limits::DISCOVERY_MAX_PAGE`], failed draws are skipped, and no
    /// ranking is applied beyond first-seen order.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidArgument`] for an empty pool or zero
    /// `draws`/`page_size`.
    pub async fn randomized_discovery_pool(
        &self,
        pool: &[CategoryRef],
        draws: u32,
        page_size: u32,
        cancel: &CancellationToken,
    ) -> Result<Aggregate, CatalogError> {
        if pool.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "category pool must not be empty".to_string(),
            ));
        }
        if draws == 0 || page_size == 0 {
            return Err(CatalogError::InvalidArgument(
                "draws and page_size must be positive".to_string(),
            ));
        }

        // ThreadRng is not Send, so pick everything before the first await.
        let picks: Vec<(CategoryQuery, u32)> = {
            let mut rng = rand::rng();
            (0..draws)
                .map(|_| {
                    let category = pool[rng.random_range(0..pool.len())].clone();
                    let page = rng.random_range(1..=limits::DISCOVERY_MAX_PAGE);
                    (CategoryQuery::new(category), page)
                })
                .collect()
        };

        let fetches = picks
            .iter()
            .map(|(query, page)| self.source.category_page(query, *page, page_size));

        let results = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("discovery pool cancelled before fan-in completed");
                return Ok(Aggregate::default());
            }
            results = futures::future::join_all(fetches) => results,
        };

        let mut acc = Accumulator::default();
        let mut complete = true;
        let mut pages_fetched = 0;

        for ((query, page), result) in picks.iter().zip(results) {
            match result {
                Ok(fetched_page) => {
                    acc.merge_page(fetched_page.items);
                    pages_fetched += 1;
                }
                Err(err) => {
                    warn!(category = %query.category, page, error = %err,
                        "discovery draw failed, skipping");
                    complete = false;
                }
            }
        }

        let mut items = acc.items;
        items.truncate((draws as usize).saturating_mul(page_size as usize));

        Ok(Aggregate {
            items,
            complete,
            pages_fetched,
        })
    }
}
