//! Response envelopes and pagination.
//!
//! Every success response carries `"success": true`; collections add a
//! `count` and, when paginated, the effective `page` and `limit`.

use serde::Serialize;

pub const DEFAULT_PAGE_LIMIT: usize = 25;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Envelope for a single entity.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ItemResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for an unpaginated collection (radius search, sub-resources).
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Envelope for a paginated collection. `count` is the total number of
/// matches, not the size of the returned page.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub success: bool,
    pub count: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<T>,
}

/// Slices `items` into the requested page. Page numbers start at 1; the
/// limit is clamped to [1, [`MAX_PAGE_LIMIT`]]. A page past the end yields
/// an empty `data` with the total `count` intact.
pub fn paginate<T>(mut items: Vec<T>, page: Option<usize>, limit: Option<usize>) -> Page<T> {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);

    let count = items.len();
    let start = (page - 1).saturating_mul(limit).min(count);
    let end = start.saturating_add(limit).min(count);
    let data = items.drain(start..end).collect();

    Page {
        success: true,
        count,
        page,
        limit,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let page = paginate((0..60).collect(), None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.count, 60);
        assert_eq!(page.data.len(), DEFAULT_PAGE_LIMIT);
        assert_eq!(page.data[0], 0);
    }

    #[test]
    fn second_page_picks_up_where_the_first_left_off() {
        let page = paginate((0..30).collect(), Some(2), Some(10));
        assert_eq!(page.data, (10..20).collect::<Vec<_>>());
        assert_eq!(page.count, 30);
    }

    #[test]
    fn limit_is_clamped_to_the_maximum() {
        let page = paginate((0..300).collect(), Some(1), Some(9999));
        assert_eq!(page.limit, MAX_PAGE_LIMIT);
        assert_eq!(page.data.len(), MAX_PAGE_LIMIT);
    }

    #[test]
    fn page_past_the_end_is_empty_but_counts_everything() {
        let page = paginate((0..5).collect::<Vec<u32>>(), Some(7), Some(25));
        assert!(page.data.is_empty());
        assert_eq!(page.count, 5);
    }
}
