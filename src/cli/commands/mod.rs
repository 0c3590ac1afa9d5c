mod discover;
mod info;
mod latest;
mod list;
mod search;
mod taxonomy;

pub use discover::cmd_discover;
pub use info::cmd_info;
pub use latest::cmd_latest;
pub use list::cmd_list;
pub use search::cmd_search;
pub use taxonomy::{cmd_countries, cmd_genres};

use tokio_util::sync::CancellationToken;

use crate::models::MovieSummary;

/// Token cancelled on Ctrl-C so an in-flight aggregation returns its
/// partial accumulator instead of hanging on teardown.
pub(crate) fn ctrl_c_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });
    cancel
}

pub(crate) fn print_movie(movie: &MovieSummary) {
    let year = if movie.year > 0 {
        format!(" ({})", movie.year)
    } else {
        String::new()
    };

    println!("• {}{year} [{} | {}]", movie.title, movie.quality, movie.language);
    if !movie.original_title.is_empty() && movie.original_title != movie.title {
        println!("  EN: {}", movie.original_title);
    }

    let episodes = if movie.episode_total.is_empty() {
        movie.episode_current.clone()
    } else {
        format!("{} / {}", movie.episode_current, movie.episode_total)
    };
    println!("  Slug: {} | Episodes: {episodes}", movie.slug);
    println!();
}
