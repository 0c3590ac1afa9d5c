use std::sync::Arc;

use crate::clients::KkphimClient;
use crate::config::Config;
use crate::models::ListFilters;
use crate::services::{CatalogAggregator, CategoryQuery, CategoryRef, page};

use super::{ctrl_c_token, print_movie};

pub async fn cmd_list(
    config: &Config,
    category: &str,
    display_page: u32,
    country: bool,
    year: Option<i32>,
    max_pages: Option<u32>,
) -> anyhow::Result<()> {
    let category = if country {
        CategoryRef::Country(category.to_string())
    } else {
        CategoryRef::resolve(category)
    };
    let query = CategoryQuery::new(category.clone()).with_filters(ListFilters {
        year,
        ..Default::default()
    });

    let client = KkphimClient::from_config(&config.catalog)?;
    let aggregator = CatalogAggregator::new(Arc::new(client));

    let aggregate = aggregator
        .fetch_by_category(
            &query,
            config.catalog.page_size,
            max_pages.unwrap_or(config.catalog.max_pages),
            &ctrl_c_token(),
        )
        .await?;

    if aggregate.items.is_empty() {
        println!("No movies found in {category}");
        return Ok(());
    }

    let view = page(&aggregate.items, display_page, config.catalog.page_size);

    println!();
    println!(
        "{category} — page {}/{} ({} movies from {} upstream pages)",
        view.page_index,
        view.page_count(),
        view.total_available,
        aggregate.pages_fetched
    );
    if !aggregate.complete {
        println!("(showing partial results: some upstream pages were unavailable)");
    }
    println!("{:-<60}", "");

    for movie in &view.items {
        print_movie(movie);
    }

    Ok(())
}
