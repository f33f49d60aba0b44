//! Query view: filtered, sorted and paginated projections of a store.
//!
//! Everything here is a pure function of the records and the view state.
//! Filtering always runs before sorting, and sorting before pagination.

use stockroom_model::{Category, CategoryFilter, Entity, Item, SortKey};

use crate::collate;

/// Rows shown per inventory page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` rows; zero when there are no rows.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

// =============================================================================
// ITEMS
// =============================================================================

/// View state of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ItemQuery {
    /// Items passing the search term and the category filter, in store order.
    pub fn filter<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let needle = self.search.to_lowercase();
        items
            .iter()
            .filter(|item| item.matches_search(&needle) && self.category.matches(&item.category_id))
            .collect()
    }

    /// Filtered items in the requested order. The sort is stable.
    pub fn filter_sorted<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut rows = self.filter(items);
        sort_items(&mut rows, self.sort);
        rows
    }

    /// Project one page of the inventory table.
    ///
    /// The requested page is clamped into range, so a page left over from a
    /// larger result set shows the last page instead of nothing.
    pub fn run<'a>(&self, items: &'a [Item]) -> ItemPage<'a> {
        let rows = self.filter_sorted(items);
        let total_count = rows.len();
        let total_pages = total_pages(total_count, PAGE_SIZE);
        let current_page = clamp_page(self.page, total_pages);
        let start = (current_page - 1) * PAGE_SIZE;
        let rows = rows.into_iter().skip(start).take(PAGE_SIZE).collect();
        ItemPage {
            rows,
            total_count,
            total_pages,
            current_page,
            page_size: PAGE_SIZE,
        }
    }
}

/// Sort item references in place.
pub fn sort_items(rows: &mut [&Item], key: SortKey) {
    match key {
        SortKey::Name => rows.sort_by(|a, b| collate::compare(&a.name, &b.name)),
        SortKey::Quantity => rows.sort_by_key(|item| item.quantity),
        SortKey::Price => rows.sort_by_key(|item| item.price),
    }
}

/// One rendered page of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPage<'a> {
    pub rows: Vec<&'a Item>,
    /// Rows matching the filters across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually shown, after clamping.
    pub current_page: usize,
    pub page_size: usize,
}

impl ItemPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether pagination controls are worth showing.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// 1-based inclusive row range shown on this page, if any.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        let last = (self.current_page * self.page_size).min(self.total_count);
        Some((first, last))
    }

    /// Footer line such as "Showing 11 to 12 of 12 items".
    pub fn summary(&self) -> String {
        match self.range() {
            Some((first, last)) => {
                format!("Showing {first} to {last} of {} items", self.total_count)
            }
            None => "No items found.".to_string(),
        }
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// View state of the category list. Categories keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    pub search: String,
}

impl CategoryQuery {
    pub fn filter<'a>(&self, categories: &'a [Category]) -> Vec<&'a Category> {
        let needle = self.search.to_lowercase();
        categories
            .iter()
            .filter(|category| category.matches_search(&needle))
            .collect()
    }

    /// Filtered categories with the number of items referencing each.
    pub fn run<'a>(&self, categories: &'a [Category], items: &[Item]) -> Vec<CategoryRow<'a>> {
        self.filter(categories)
            .into_iter()
            .map(|category| CategoryRow {
                category,
                item_count: items
                    .iter()
                    .filter(|item| item.category_id == category.id)
                    .count(),
            })
            .collect()
    }
}

/// A category card with its item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRow<'a> {
    pub category: &'a Category,
    pub item_count: usize,
}
