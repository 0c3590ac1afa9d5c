use crate::clients::KkphimClient;
use crate::config::Config;

use super::print_movie;

pub async fn cmd_latest(config: &Config, page: u32) -> anyhow::Result<()> {
    let client = KkphimClient::from_config(&config.catalog)?;
    let movies = client.latest(page.max(1)).await?;

    if movies.is_empty() {
        println!("No recently updated movies on page {page}");
        return Ok(());
    }

    println!();
    println!("Latest updates (page {page}):");
    println!("{:-<60}", "");

    for movie in &movies {
        print_movie(movie);
    }

    Ok(())
}
