//! Movie detail and episode models from `/phim/{slug}`.

use serde::{Deserialize, Serialize};

use super::movie::TagRef;

#[derive(Debug, Default, Deserialize)]
pub struct MovieDetailResponse {
    #[serde(default)]
    pub movie: Option<MovieDetail>,

    #[serde(default)]
    pub episodes: Vec<EpisodeServer>,
}

/// Full record for a single title, richer than the list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub slug: String,

    #[serde(rename = "name", default)]
    pub title: String,

    #[serde(rename = "origin_name", default)]
    pub original_title: String,

    #[serde(default)]
    pub content: String,

    #[serde(rename = "poster_url", default)]
    pub poster_path: String,

    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub time: String,

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

    #[serde(default)]
    pub category: Vec<TagRef>,

    #[serde(default)]
    pub country: Vec<TagRef>,

    #[serde(default)]
    pub trailer_url: String,
}

/// One hosting server with its ordered episode sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeServer {
    #[serde(default)]
    pub server_name: String,

    #[serde(default)]
    pub server_data: Vec<EpisodeSource>,
}

/// A single playable episode entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeSource {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub link_embed: String,

    #[serde(default)]
    pub link_m3u8: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_detail_with_episode_servers() {
        let body = serde_json::json!({
            "movie": {
                "slug": "one-piece",
                "name": "Đảo Hải Tặc",
                "origin_name": "One Piece",
                "year": 1999,
                "episode_current": "Tập 1100",
                "episode_total": "????"
            },
            "episodes": [{
                "server_name": "#Hà Nội (Vietsub)",
                "server_data": [{
                    "name": "Tập 01",
                    "slug": "tap-01",
                    "filename": "One.Piece.E01",
                    "link_embed": "https://player.phimapi.com/player/?url=x",
                    "link_m3u8": "https://s.phim1280.tv/x/index.m3u8"
                }]
            }]
        });

        let detail: MovieDetailResponse = serde_json::from_value(body).unwrap();
        let movie = detail.movie.unwrap();
        assert_eq!(movie.slug, "one-piece");
        assert_eq!(detail.episodes.len(), 1);
        assert_eq!(detail.episodes[0].server_data[0].slug, "tap-01");
    }

    #[test]
    fn missing_movie_and_episodes_decode_empty() {
        let detail: MovieDetailResponse = serde_json::from_str("{}").unwrap();
        assert!(detail.movie.is_none());
        assert!(detail.episodes.is_empty());
    }
}
