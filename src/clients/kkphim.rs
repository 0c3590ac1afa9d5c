use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::CatalogConfig;
use crate::constants::{KKPHIM_BASE_URL, categories};
use crate::models::movie::ListEnvelope;
use crate::models::{CategoryPage, LatestPage, MovieDetailResponse, MovieSummary, Taxonomy};
use crate::services::catalog_source::{CatalogSource, CategoryQuery, SearchQuery, SourceError};

/// HTTP client for the KKPhim catalog API.
///
/// Explicitly constructed and passed to whoever needs it; there is no
/// process-wide client singleton.
#[derive(Clone)]
pub struct KkphimClient {
    client: Client,
    base_url: String,
}

impl Default for KkphimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KkphimClient {
    /// Creates a client against the public API with a 30-second timeout.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built (broken system TLS setup),
    /// which is not recoverable at this level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(KKPHIM_BASE_URL, Duration::from_secs(30))
            .expect("Failed to create KkphimClient with default timeout")
    }

    /// Creates a client with an explicit base URL and per-request timeout.
    /// A timed-out request surfaces as [`SourceError::Http`], which the
    /// aggregator treats like any other failed page.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("phimdex/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, SourceError> {
        Self::with_timeout(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Reuses an existing HTTP client for connection pooling.
    #[must_use]
    pub fn with_shared_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn parse_url(&self, path: &str) -> Result<Url, SourceError> {
        Ok(Url::parse(&format!("{}/{path}", self.base_url))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        debug!(url = %url, "catalog request");
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(SourceError::Decode)
    }

    /// One page of a v1 category/genre/country listing.
    pub async fn list_page(
        &self,
        query: &CategoryQuery,
        page: u32,
        limit: u32,
    ) -> Result<CategoryPage, SourceError> {
        let mut url = self.parse_url(&format!(
            "v1/api/{}/{}",
            query.category.path_segment(),
            urlencoding::encode(query.category.id())
        ))?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        query.filters.apply(&mut url);

        let envelope: ListEnvelope = self.get_json(url).await?;
        Ok(envelope.into())
    }

    /// One page of keyword search results.
    pub async fn search(
        &self,
        query: &SearchQuery,
        page: u32,
        limit: u32,
    ) -> Result<Vec<MovieSummary>, SourceError> {
        let mut url = self.parse_url("v1/api/tim-kiem")?;
        url.query_pairs_mut()
            .append_pair("keyword", &query.keyword)
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        query.filters.apply(&mut url);

        let envelope: ListEnvelope = self.get_json(url).await?;
        Ok(envelope.data.items)
    }

    /// The latest-updates feed. Items live at the top level here, unlike
    /// the v1 envelopes.
    pub async fn latest(&self, page: u32) -> Result<Vec<MovieSummary>, SourceError> {
        let mut url = self.parse_url(&format!("danh-sach/{}", categories::LATEST_FEED))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());

        let latest: LatestPage = self.get_json(url).await?;
        Ok(latest.items)
    }

    /// Full detail plus episode servers for one title.
    pub async fn movie_detail(&self, slug: &str) -> Result<MovieDetailResponse, SourceError> {
        let url = self.parse_url(&format!("phim/{}", urlencoding::encode(slug)))?;
        self.get_json(url).await
    }

    /// All known genres.
    pub async fn genres(&self) -> Result<Vec<Taxonomy>, SourceError> {
        let url = self.parse_url("the-loai")?;
        self.get_json(url).await
    }

    /// All known countries.
    pub async fn countries(&self) -> Result<Vec<Taxonomy>, SourceError> {
        let url = self.parse_url("quoc-gia")?;
        self.get_json(url).await
    }
}

#[async_trait::async_trait]
impl CatalogSource for KkphimClient {
    async fn category_page(
        &self,
        query: &CategoryQuery,
        page: u32,
        limit: u32,
    ) -> Result<CategoryPage, SourceError> {
        self.list_page(query, page, limit).await
    }

    async fn search_page(
        &self,
        query: &SearchQuery,
        page: u32,
        limit: u32,
    ) -> Result<Vec<MovieSummary>, SourceError> {
        self.search(query, page, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog_source::CategoryRef;

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client =
            KkphimClient::with_timeout("https://phimapi.com/", Duration::from_secs(5)).unwrap();
        let url = client.parse_url("phim/one-piece").unwrap();
        assert_eq!(url.as_str(), "https://phimapi.com/phim/one-piece");
    }

    #[test]
    fn list_urls_route_by_category_kind() {
        let client = KkphimClient::new();
        let genre = CategoryQuery::new(CategoryRef::resolve("kinh-di"));
        let url = client
            .parse_url(&format!(
                "v1/api/{}/{}",
                genre.category.path_segment(),
                genre.category.id()
            ))
            .unwrap();
        assert!(url.as_str().ends_with("/v1/api/the-loai/kinh-di"));
    }
}
