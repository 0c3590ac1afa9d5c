//! CLI module - command-line interface for phimdex
//!
//! Structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// phimdex - movie catalog browser
/// Aggregates paginated listings from the KKPhim catalog API
#[derive(Parser)]
#[command(name = "phimdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest-updated movies
    #[command(alias = "new")]
    Latest {
        /// Page of the latest feed
        #[arg(default_value = "1")]
        page: u32,
    },

    /// Browse a category or genre, aggregated across pages
    #[command(alias = "ls", alias = "l")]
    List {
        /// Category id (e.g. phim-le, phim-bo, hoat-hinh, hanh-dong)
        category: String,

        /// Page of the aggregated result to display
        #[arg(long, default_value = "1")]
        page: u32,

        /// Treat the id as a country instead of a type/genre
        #[arg(long)]
        country: bool,

        /// Filter by release year
        #[arg(long)]
        year: Option<i32>,

        /// Maximum upstream pages to aggregate
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Search the catalog by keyword
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        /// Result page
        #[arg(long, default_value = "1")]
        page: u32,

        /// Filter by release year
        #[arg(long)]
        year: Option<i32>,

        /// Filter by country slug
        #[arg(long)]
        country: Option<String>,
    },

    /// Build a randomized "for you" pool from the configured categories
    #[command(alias = "d", alias = "foryou")]
    Discover {
        /// Number of random draws
        #[arg(long)]
        draws: Option<u32>,
    },

    /// Show details and episode servers for one title
    #[command(alias = "i")]
    Info {
        /// Movie slug
        slug: String,
    },

    /// List all known genres
    Genres,

    /// List all known countries
    Countries,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
