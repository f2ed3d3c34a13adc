// src/pagination.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagingInfo {
    pub current_page: i64,
    pub items_per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl PagingInfo {
    pub fn new(current_page: i64, items_per_page: i64, total_items: i64) -> Self {
        PagingInfo {
            current_page,
            items_per_page,
            total_items,
            total_pages: calculate_total_pages(total_items, items_per_page),
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `ceil(total_items / items_per_page)`; 0 przy pustej kolekcji.
pub fn calculate_total_pages(total_items: i64, items_per_page: i64) -> i64 {
    if total_items <= 0 || items_per_page <= 0 {
        return 0;
    }
    (total_items + items_per_page - 1) / items_per_page
}

/// Liczba pomijanych elementów dla danej strony. Strony < 1 zaczynają od początku.
pub fn page_offset(page: i64, page_size: i64) -> usize {
    let offset = page
        .saturating_sub(1)
        .max(0)
        .saturating_mul(page_size.max(0));
    usize::try_from(offset).unwrap_or(usize::MAX)
}

/// Wycina jedną stronę z uporządkowanej kolekcji. Strona spoza zakresu daje pusty wynik.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, page: i64, page_size: i64) -> Vec<T> {
    let take = usize::try_from(page_size.max(0)).unwrap_or(usize::MAX);
    items
        .into_iter()
        .skip(page_offset(page, page_size))
        .take(take)
        .collect()
}
