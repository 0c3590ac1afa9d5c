pub mod episode;
pub mod movie;

pub use episode::{EpisodeServer, EpisodeSource, MovieDetail, MovieDetailResponse};
pub use movie::{CategoryPage, LatestPage, ListFilters, MovieSummary, TagRef, Taxonomy};
