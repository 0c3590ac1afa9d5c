use std::sync::Arc;

use crate::clients::KkphimClient;
use crate::config::Config;
use crate::models::ListFilters;
use crate::services::{CatalogAggregator, SearchQuery};

use super::print_movie;

pub async fn cmd_search(
    config: &Config,
    keyword: &str,
    page: u32,
    year: Option<i32>,
    country: Option<String>,
) -> anyhow::Result<()> {
    println!("Searching for: {keyword}");

    let query = SearchQuery::new(keyword).with_filters(ListFilters {
        year,
        country,
        ..Default::default()
    });

    let client = KkphimClient::from_config(&config.catalog)?;
    let aggregator = CatalogAggregator::new(Arc::new(client));

    let results = aggregator
        .fetch_by_keyword(&query, page, config.catalog.page_size)
        .await?;

    if results.is_empty() {
        println!("No movies found matching '{keyword}'");
        return Ok(());
    }

    println!();
    println!("Search results (page {page}):");
    println!("{:-<60}", "");

    for movie in &results {
        print_movie(movie);
    }

    println!("For details: phimdex info <slug>");

    Ok(())
}
