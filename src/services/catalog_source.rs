//! Upstream source abstraction for the catalog aggregator.
//!
//! The aggregator only ever talks to a [`CatalogSource`], so the HTTP client
//! can be swapped for a scripted source in tests and no module-level client
//! singleton exists anywhere.

use crate::constants::categories;
use crate::models::{CategoryPage, ListFilters, MovieSummary};
use thiserror::Error;

/// Transport-level failure from a single upstream request.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Which upstream listing family a category id belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryRef {
    /// `/v1/api/danh-sach/{id}` — top-level list types (phim-le, phim-bo, ...).
    TypeList(String),
    /// `/v1/api/the-loai/{id}` — genres.
    Genre(String),
    /// `/v1/api/quoc-gia/{id}` — countries.
    Country(String),
}

impl CategoryRef {
    /// Resolves a bare category id the way the browse flow does: known
    /// type-list slugs go to `danh-sach`, everything else is a genre.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        if categories::TYPE_LISTS.contains(&id) {
            Self::TypeList(id.to_string())
        } else {
            Self::Genre(id.to_string())
        }
    }

    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::TypeList(_) => "danh-sach",
            Self::Genre(_) => "the-loai",
            Self::Country(_) => "quoc-gia",
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::TypeList(id) | Self::Genre(id) | Self::Country(id) => id,
        }
    }
}

impl std::fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.path_segment(), self.id())
    }
}

/// A category listing request: which listing, plus optional filters.
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub category: CategoryRef,
    pub filters: ListFilters,
}

impl CategoryQuery {
    #[must_use]
    pub fn new(category: CategoryRef) -> Self {
        Self {
            category,
            filters: ListFilters::default(),
        }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: ListFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// A keyword search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub filters: ListFilters,
}

impl SearchQuery {
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            filters: ListFilters::default(),
        }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: ListFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// The two page fetches the aggregator needs from upstream.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of a category listing, with the upstream's own
    /// `total_pages` so callers can stop early.
    async fn category_page(
        &self,
        query: &CategoryQuery,
        page: u32,
        limit: u32,
    ) -> Result<CategoryPage, SourceError>;

    /// Fetches one page of keyword search results.
    async fn search_page(
        &self,
        query: &SearchQuery,
        page: u32,
        limit: u32,
    ) -> Result<Vec<MovieSummary>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_dispatches_known_type_lists() {
        assert_eq!(
            CategoryRef::resolve("phim-bo"),
            CategoryRef::TypeList("phim-bo".to_string())
        );
        assert_eq!(
            CategoryRef::resolve("hanh-dong"),
            CategoryRef::Genre("hanh-dong".to_string())
        );
    }

    #[test]
    fn path_segments_match_upstream_routes() {
        assert_eq!(CategoryRef::resolve("hoat-hinh").path_segment(), "danh-sach");
        assert_eq!(CategoryRef::resolve("kinh-di").path_segment(), "the-loai");
        assert_eq!(
            CategoryRef::Country("han-quoc".to_string()).path_segment(),
            "quoc-gia"
        );
    }
}
