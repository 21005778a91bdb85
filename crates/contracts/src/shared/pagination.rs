//! Page slicing and pagination-control layout.
//!
//! Pages are 1-based throughout.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page.
pub const PAGE_WINDOW: usize = 2;

/// One entry of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// "Showing start-end of total" caption values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Number of pages, never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the items of `page`; anything out of range yields an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Lays out the page buttons.
///
/// The first and last pages are always present, pages within
/// [`PAGE_WINDOW`] of `current` are listed, and the page just outside the
/// window on either side becomes an ellipsis. The window is not re-centred
/// near the edges.
pub fn page_buttons(total_items: usize, page_size: usize, current: usize) -> Vec<PageButton> {
    let last = total_pages(total_items, page_size);
    let low = current.saturating_sub(PAGE_WINDOW);
    let high = current.saturating_add(PAGE_WINDOW);

    let mut buttons = Vec::new();
    for i in 1..=last {
        if i == 1 || i == last || (i >= low && i <= high) {
            buttons.push(PageButton::Page(i));
        } else if current > PAGE_WINDOW + 1 && i == current - (PAGE_WINDOW + 1) {
            buttons.push(PageButton::Ellipsis);
        } else if high < last && i == high + 1 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons
}

/// Caption values for `page`, clamped into the existing pages.
pub fn page_range(total_items: usize, page_size: usize, page: usize) -> PageRange {
    if total_items == 0 || page_size == 0 {
        return PageRange {
            start: 0,
            end: 0,
            total: 0,
        };
    }
    let page = clamp_page(page, total_pages(total_items, page_size));
    let start = (page - 1) * page_size + 1;
    let end = page.saturating_mul(page_size).min(total_items);
    PageRange {
        start,
        end,
        total: total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page};

    #[test]
    fn test_paginate_reconstructs_items() {
        let items: Vec<u32> = (0..23).collect();
        let pages = total_pages(items.len(), 5);
        assert_eq!(pages, 5);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(paginate(&items, 5, page));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 10, 1), &items[..]);
        assert!(paginate(&items, 10, 2).is_empty());
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
        assert!(paginate(&items, 10, usize::MAX).is_empty());
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_buttons_few_pages() {
        assert_eq!(page_buttons(25, 10, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_buttons(5, 10, 1), vec![Page(1)]);
        assert_eq!(page_buttons(0, 10, 1), vec![Page(1)]);
    }

    #[test]
    fn test_buttons_middle_page() {
        assert_eq!(
            page_buttons(200, 10, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20),
            ]
        );
    }

    #[test]
    fn test_buttons_near_edges_keep_fixed_window() {
        assert_eq!(
            page_buttons(200, 10, 1),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_buttons(200, 10, 20),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
        // Page 2 sits exactly three below the current page and collapses
        assert_eq!(
            page_buttons(100, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn test_page_range() {
        assert_eq!(
            page_range(5, 10, 1),
            PageRange {
                start: 1,
                end: 5,
                total: 5
            }
        );
        assert_eq!(
            page_range(25, 10, 3),
            PageRange {
                start: 21,
                end: 25,
                total: 25
            }
        );
        assert_eq!(page_range(0, 10, 1).start, 0);
    }

    #[test]
    fn test_huge_page_numbers_do_not_overflow() {
        assert_eq!(
            page_buttons(200, 10, usize::MAX),
            vec![Page(1), Page(20)]
        );
        assert_eq!(
            page_range(5, 10, usize::MAX),
            PageRange {
                start: 1,
                end: 5,
                total: 5
            }
        );
        assert_eq!(page_range(25, 10, usize::MAX).start, 21);
    }
}
