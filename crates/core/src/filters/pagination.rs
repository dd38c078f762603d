use serde::{Deserialize, Serialize};

use crate::constants::MAX_VISIBLE_PAGES;

/// One page of a list plus what the paginator needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, clamped to the available pages.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Returns page `page` (1-based) of `items`. Out-of-range pages are clamped,
/// and an empty list yields page 1 of 0.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), per_page);
    let current_page = page.clamp(1, total_pages.max(1));
    let start = (current_page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        current_page,
        total_pages,
        total_items: items.len(),
    }
}

/// Page buttons to render: at most five, keeping `current` centered when
/// possible.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).collect();
    }
    let half = MAX_VISIBLE_PAGES / 2;
    let first = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages - MAX_VISIBLE_PAGES + 1
    } else {
        current - half
    };
    (first..first + MAX_VISIBLE_PAGES).collect()
}
