use std::sync::Arc;

use crate::clients::KkphimClient;
use crate::config::Config;
use crate::services::{CatalogAggregator, CategoryRef};

use super::{ctrl_c_token, print_movie};

pub async fn cmd_discover(config: &Config, draws: Option<u32>) -> anyhow::Result<()> {
    let pool: Vec<CategoryRef> = config
        .discovery
        .pool
        .iter()
        .map(|id| CategoryRef::resolve(id))
        .collect();

    let client = KkphimClient::from_config(&config.catalog)?;
    let aggregator = CatalogAggregator::new(Arc::new(client));

    let aggregate = aggregator
        .randomized_discovery_pool(
            &pool,
            draws.unwrap_or(config.discovery.draws),
            config.discovery.page_size,
            &ctrl_c_token(),
        )
        .await?;

    if aggregate.items.is_empty() {
        println!("No movies in the discovery pool right now");
        return Ok(());
    }

    println!();
    println!(
        "For you — {} movies sampled from {} categories",
        aggregate.items.len(),
        config.discovery.pool.len()
    );
    if !aggregate.complete {
        println!("(some draws were skipped due to upstream errors)");
    }
    println!("{:-<60}", "");

    for movie in &aggregate.items {
        print_movie(movie);
    }

    Ok(())
}
