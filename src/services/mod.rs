pub mod aggregator;
pub use aggregator::{Aggregate, CatalogAggregator, CatalogError};

pub mod catalog_source;
pub use catalog_source::{CatalogSource, CategoryQuery, CategoryRef, SearchQuery, SourceError};

pub mod paging;
pub use paging::{PagedResult, page};
