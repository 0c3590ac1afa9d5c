//! Wire models for the KKPhim catalog API.
//!
//! Every field decodes with a default so a missing or malformed field on one
//! item never fails the whole page. An absent `items` array decodes as an
//! empty page and an absent `total_pages` as 1, matching upstream behavior
//! when a listing runs dry.

use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the list and search endpoints.
///
/// `slug` is the stable identity; aggregation dedupes on it and drops
/// entries where it is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default)]
    pub slug: String,

    #[serde(rename = "name", default)]
    pub title: String,

    #[serde(rename = "origin_name", default)]
    pub original_title: String,

    #[serde(rename = "poster_url", default)]
    pub poster_path: String,

    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub category: Vec<TagRef>,

    #[serde(default)]
    pub country: Vec<TagRef>,

    #[serde(default)]
    pub quality: String,

    #[serde(rename = "lang", default)]
    pub language: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub episode_current: String,

    #[serde(default)]
    pub episode_total: String,
}

/// Genre or country tag attached to a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,
}

/// Entry in the `/the-loai` and `/quoc-gia` taxonomy listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,
}

/// One page of a paginated category/genre/country/search listing
/// (`data.items` + `data.total_pages` in the v1 envelope).
#[derive(Debug, Clone, Default)]
pub struct CategoryPage {
    pub items: Vec<MovieSummary>,
    pub total_pages: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default)]
    pub data: ListData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListData {
    #[serde(default)]
    pub items: Vec<MovieSummary>,

    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

const fn default_total_pages() -> u32 {
    1
}

impl From<ListEnvelope> for CategoryPage {
    fn from(envelope: ListEnvelope) -> Self {
        Self {
            items: envelope.data.items,
            // A page claiming zero pages still counts as one.
            total_pages: envelope.data.total_pages.max(1),
        }
    }
}

/// The latest-updates feed keeps `items` at the top level.
#[derive(Debug, Default, Deserialize)]
pub struct LatestPage {
    #[serde(default)]
    pub items: Vec<MovieSummary>,
}

/// Optional filters accepted by the v1 list and search endpoints.
/// Unset filters are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub sort_field: Option<String>,
    pub sort_type: Option<String>,
    pub sort_lang: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub year: Option<i32>,
}

impl ListFilters {
    pub(crate) fn apply(&self, url: &mut url::Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(ref sort_field) = self.sort_field {
            pairs.append_pair("sort_field", sort_field);
        }
        if let Some(ref sort_type) = self.sort_type {
            pairs.append_pair("sort_type", sort_type);
        }
        if let Some(ref sort_lang) = self.sort_lang {
            pairs.append_pair("sort_lang", sort_lang);
        }
        if let Some(ref category) = self.category {
            pairs.append_pair("category", category);
        }
        if let Some(ref country) = self.country {
            pairs.append_pair("country", country);
        }
        if let Some(year) = self.year {
            pairs.append_pair("year", &year.to_string());
        }
    }
}
