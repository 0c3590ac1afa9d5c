use crate::clients::KkphimClient;
use crate::config::Config;

pub async fn cmd_info(config: &Config, slug: &str) -> anyhow::Result<()> {
    let client = KkphimClient::from_config(&config.catalog)?;
    let detail = client.movie_detail(slug).await?;

    let Some(movie) = detail.movie else {
        println!("No movie found for slug '{slug}'");
        return Ok(());
    };

    println!();
    println!("{} ({})", movie.title, movie.year);
    if !movie.original_title.is_empty() {
        println!("Original title: {}", movie.original_title);
    }
    println!("{:-<60}", "");
    println!(
        "Status: {} | Quality: {} | Language: {}",
        movie.status, movie.quality, movie.language
    );
    println!(
        "Episodes: {} / {}",
        movie.episode_current, movie.episode_total
    );

    let tags = |label: &str, tags: &[crate::models::TagRef]| {
        if !tags.is_empty() {
            let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
            println!("{label}: {}", names.join(", "));
        }
    };
    tags("Genres", &movie.category);
    tags("Countries", &movie.country);

    if !movie.content.is_empty() {
        println!();
        println!("{}", movie.content);
    }

    for server in &detail.episodes {
        println!();
        println!("Server: {}", server.server_name);
        for episode in &server.server_data {
            println!("  {} — {}", episode.name, episode.link_m3u8);
        }
    }

    Ok(())
}
