use super::dto::{Order, OrderStatus};
use crate::shared::list::filter_list;
use crate::shared::number_format::{format_currency, NumberLocale};
use crate::shared::pagination::{
    clamp_page, page_buttons, page_range, paginate, total_pages, PageButton, PageRange,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Orders whose id, customer or status contain `term`, ignoring case.
pub fn filter_orders(orders: &[Order], term: &str) -> Vec<Order> {
    filter_list(orders, term)
}

/// Search and pagination state of the orders table.
///
/// `filtered` is derived from `source` and `search_term`; changing the term
/// recomputes it and moves back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView {
    source: Vec<Order>,
    filtered: Vec<Order>,
    search_term: String,
    page: usize,
    page_size: usize,
}

impl OrdersView {
    pub fn new(source: Vec<Order>, page_size: usize) -> Self {
        Self {
            filtered: source.clone(),
            source,
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.filtered = filter_orders(&self.source, term);
        self.page = 1;
    }

    /// Moves to `page`, clamped into the valid range. Returns the new page.
    pub fn select_page(&mut self, page: usize) -> usize {
        self.page = clamp_page(page, self.total_pages());
        self.page
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn source(&self) -> &[Order] {
        &self.source
    }

    pub fn filtered(&self) -> &[Order] {
        &self.filtered
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn current_items(&self) -> &[Order] {
        paginate(&self.filtered, self.page_size, self.page)
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.filtered.len(), self.page_size, self.page)
    }

    pub fn range(&self) -> PageRange {
        page_range(self.filtered.len(), self.page_size, self.page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Builds the view-model for the table and pagination control.
    pub fn to_page_view(&self, locale: &NumberLocale) -> OrdersPageView {
        OrdersPageView {
            rows: self
                .current_items()
                .iter()
                .map(|order| OrderRow::from_order(order, locale))
                .collect(),
            buttons: self.page_buttons(),
            current_page: self.page,
            total_pages: self.total_pages(),
            range: self.range(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            search_term: self.search_term.clone(),
        }
    }
}

/// One table row, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    /// e.g. "Aug 5, 2025"
    pub date: String,
    pub customer: String,
    pub amount: String,
    pub status: OrderStatus,
}

impl OrderRow {
    pub fn from_order(order: &Order, locale: &NumberLocale) -> Self {
        Self {
            id: order.id.clone(),
            date: order.date.format("%b %-d, %Y").to_string(),
            customer: order.customer.clone(),
            amount: format_currency(order.amount, locale),
            status: order.status,
        }
    }
}

/// Everything the orders region needs to draw one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPageView {
    pub rows: Vec<OrderRow>,
    pub buttons: Vec<PageButton>,
    pub current_page: usize,
    pub total_pages: usize,
    pub range: PageRange,
    pub has_previous: bool,
    pub has_next: bool,
    pub search_term: String,
}

impl OrdersPageView {
    /// "Showing 1-5 of 5 orders"
    pub fn caption(&self) -> String {
        format!(
            "Showing {}-{} of {} orders",
            self.range.start, self.range.end, self.range.total
        )
    }
}

impl Default for OrdersPageView {
    fn default() -> Self {
        OrdersView::new(Vec::new(), DEFAULT_PAGE_SIZE).to_page_view(&NumberLocale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::mock;
    use crate::shared::list::Searchable;
    use chrono::NaiveDate;

    fn many_orders(count: usize) -> Vec<Order> {
        (1..=count)
            .map(|i| Order {
                id: format!("ORD{:03}", i),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                customer: (if i % 2 == 0 { "Even Customer" } else { "Odd Customer" }).to_string(),
                amount: i as f64,
                status: OrderStatus::Completed,
            })
            .collect()
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let orders = mock::dashboard_data().recent_orders;
        assert_eq!(filter_orders(&orders, ""), orders);
    }

    #[test]
    fn test_filter_includes_exactly_the_matches() {
        let orders = mock::dashboard_data().recent_orders;
        for term in ["o", "JANE", "ord00", "ed", "xyz", "Completed"] {
            let result = filter_orders(&orders, term);
            let lower = term.to_lowercase();
            for order in &result {
                assert!(order.matches_filter(&lower));
            }
            let expected: Vec<&Order> = orders.iter().filter(|o| o.matches_filter(&lower)).collect();
            assert_eq!(result.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_search_pending_finds_one_order() {
        let orders = mock::dashboard_data().recent_orders;
        let result = filter_orders(&orders, "pending");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ORD003");
    }

    #[test]
    fn test_sample_orders_fit_one_page() {
        let view = OrdersView::new(mock::dashboard_data().recent_orders, 10);
        assert_eq!(view.current_items().len(), 5);
        assert!(paginate(view.filtered(), 10, 2).is_empty());
        assert_eq!(view.page_buttons(), vec![PageButton::Page(1)]);
        assert!(!view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = OrdersView::new(many_orders(35), 10);
        assert_eq!(view.select_page(3), 3);

        view.set_search_term("even");
        assert_eq!(view.page(), 1);
        assert_eq!(view.filtered().len(), 17);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn test_select_page_is_clamped() {
        let mut view = OrdersView::new(many_orders(35), 10);
        assert_eq!(view.select_page(0), 1);
        assert_eq!(view.select_page(99), 4);
        assert_eq!(view.current_items().len(), 5);
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_no_matches_still_has_one_page() {
        let mut view = OrdersView::new(many_orders(12), 10);
        view.set_search_term("nobody");
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page(), 1);
        assert!(view.current_items().is_empty());
        assert_eq!(view.to_page_view(&NumberLocale::en_usd()).caption(), "Showing 0-0 of 0 orders");
    }

    #[test]
    fn test_page_view_rows() {
        let view = OrdersView::new(mock::dashboard_data().recent_orders, 10);
        let page = view.to_page_view(&NumberLocale::en_usd());
        assert_eq!(page.caption(), "Showing 1-5 of 5 orders");

        let first = &page.rows[0];
        assert_eq!(first.id, "ORD001");
        assert_eq!(first.date, "Aug 5, 2025");
        assert_eq!(first.amount, "$500.00");
        assert_eq!(first.status.css_class(), "status-completed");
    }
}
