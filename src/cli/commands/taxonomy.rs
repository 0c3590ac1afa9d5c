use crate::clients::KkphimClient;
use crate::config::Config;
use crate::models::Taxonomy;

fn print_taxonomies(label: &str, entries: &[Taxonomy]) {
    println!();
    println!("{label}:");
    println!("{:-<60}", "");
    for entry in entries {
        println!("• {} ({})", entry.name, entry.slug);
    }
}

pub async fn cmd_genres(config: &Config) -> anyhow::Result<()> {
    let client = KkphimClient::from_config(&config.catalog)?;
    let genres = client.genres().await?;
    print_taxonomies("Genres", &genres);
    Ok(())
}

pub async fn cmd_countries(config: &Config) -> anyhow::Result<()> {
    let client = KkphimClient::from_config(&config.catalog)?;
    let countries = client.countries().await?;
    print_taxonomies("Countries", &countries);
    Ok(())
}
