//! Pure page-slicing over a materialized aggregate. No network, no failure.

use crate::models::MovieSummary;

/// One page-sliced view of an aggregate.
#[derive(Debug, Clone)]
pub struct PagedResult {
    pub items: Vec<MovieSummary>,
    /// 1-based page index this view was sliced for.
    pub page_index: u32,
    pub page_size: u32,
    /// Length of the backing aggregate. Best-effort: an incomplete
    /// aggregate undercounts what upstream actually has.
    pub total_available: usize,
}

impl PagedResult {
    /// Number of pages the backing aggregate spans at this page size.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_available.div_ceil(self.page_size as usize)
    }
}

/// Returns items `[(page_index-1)*page_size, page_index*page_size)` of the
/// aggregate, clamped to its length. An out-of-range index (including 0)
/// yields an empty page, never an error.
#[must_use]
pub fn page(aggregate: &[MovieSummary], page_index: u32, page_size: u32) -> PagedResult {
    let total_available = aggregate.len();

    let items = if page_index == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page_index as usize - 1).saturating_mul(page_size as usize);
        let end = start.saturating_add(page_size as usize).min(total_available);
        if start >= total_available {
            Vec::new()
        } else {
            aggregate[start..end].to_vec()
        }
    };

    PagedResult {
        items,
        page_index,
        page_size,
        total_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(len: usize) -> Vec<MovieSummary> {
        (0..len)
            .map(|n| {
                serde_json::from_value(serde_json::json!({
                    "slug": format!("m{n}"),
                    "name": format!("Movie {n}")
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn pages_partition_the_aggregate_exactly() {
        let agg = aggregate(17);
        let mut collected = Vec::new();

        let first = page(&agg, 1, 5);
        assert_eq!(first.page_count(), 4);

        for index in 1..=4 {
            let view = page(&agg, index, 5);
            assert!(view.items.len() <= 5);
            assert_eq!(view.total_available, 17);
            collected.extend(view.items.into_iter().map(|m| m.slug));
        }

        let expected: Vec<String> = (0..17).map(|n| format!("m{n}")).collect();
        assert_eq!(collected, expected);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let agg = aggregate(17);
        assert_eq!(page(&agg, 4, 5).items.len(), 2);

        // Exact multiple: last page is full.
        let agg = aggregate(15);
        assert_eq!(page(&agg, 3, 5).items.len(), 5);
    }

    #[test]
    fn slicing_is_stable_across_repeated_calls() {
        let agg = aggregate(12);
        let first = page(&agg, 2, 5);
        let second = page(&agg, 2, 5);
        let slugs = |view: &PagedResult| -> Vec<String> {
            view.items.iter().map(|m| m.slug.clone()).collect()
        };
        assert_eq!(slugs(&first), slugs(&second));
        assert_eq!(slugs(&first), ["m5", "m6", "m7", "m8", "m9"]);
    }

    #[test]
    fn out_of_range_and_zero_inputs_yield_empty_pages() {
        let agg = aggregate(3);
        assert!(page(&agg, 5, 10).items.is_empty());
        assert!(page(&agg, 0, 10).items.is_empty());
        assert!(page(&agg, 1, 0).items.is_empty());
        assert!(page(&[], 1, 10).items.is_empty());
        assert_eq!(page(&agg, 5, 10).total_available, 3);
    }
}
