/// Types that can be matched against a free-text search term.
pub trait Searchable {
    /// Case-insensitive match; `filter` is already lowercased.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Keeps items matching `filter`, preserving their order.
///
/// An empty filter returns every item.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Case-insensitive substring test against an already lowercased needle.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
