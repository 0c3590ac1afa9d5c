pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;

use clap::Parser;
pub use config::Config;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Latest { page } => cli::cmd_latest(&config, page).await,

        Commands::List {
            category,
            page,
            country,
            year,
            max_pages,
        } => cli::cmd_list(&config, &category, page, country, year, max_pages).await,

        Commands::Search {
            query,
            page,
            year,
            country,
        } => {
            let keyword = query.join(" ");
            cli::cmd_search(&config, &keyword, page, year, country).await
        }

        Commands::Discover { draws } => cli::cmd_discover(&config, draws).await,

        Commands::Info { slug } => cli::cmd_info(&config, &slug).await,

        Commands::Genres => cli::cmd_genres(&config).await,

        Commands::Countries => cli::cmd_countries(&config).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("Created config.toml with defaults");
            } else {
                println!("config.toml already exists, leaving it alone");
            }
            Ok(())
        }
    }
}
