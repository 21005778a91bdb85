//! Sales overview controller.
//!
//! Owns the loaded payload, the orders table state and the live chart
//! handles, and pushes view-models to a [`SalesOverviewSurface`]. Loading is
//! split into [`DashboardController::begin_load`] and
//! [`DashboardController::complete_load`] so the fetch can be awaited without
//! holding the controller.

use super::charts::{average_order_chart, daily_sales_chart};
use super::dto::DashboardData;
use super::metrics::summary_metrics;
use super::orders::{OrdersPageView, OrdersView, DEFAULT_PAGE_SIZE};
use super::source::LoadError;
use crate::shared::chart::{ChartBackend, ChartName, ChartRegistry};
use crate::shared::metric::MetricCard;
use crate::shared::navigation::NavPage;
use crate::shared::number_format::NumberLocale;
use chrono::NaiveDate;
use rand::Rng;

/// Independently rendered parts of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Metrics,
    Charts,
    Orders,
    Navigation,
}

/// Receives render requests from the controller.
pub trait SalesOverviewSurface {
    /// Render calls for unmounted regions are skipped.
    fn is_mounted(&self, _region: Region) -> bool {
        true
    }

    fn show_loading(&mut self);

    fn show_ready(&mut self);

    fn show_error(&mut self, error: &LoadError);

    fn show_metrics(&mut self, metrics: &[MetricCard]);

    fn show_orders(&mut self, page: &OrdersPageView);

    fn show_navigation(&mut self, active: NavPage);
}

/// Surface with nothing mounted
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl SalesOverviewSurface for NullSurface {
    fn is_mounted(&self, _region: Region) -> bool {
        false
    }

    fn show_loading(&mut self) {}

    fn show_ready(&mut self) {}

    fn show_error(&mut self, _error: &LoadError) {}

    fn show_metrics(&mut self, _metrics: &[MetricCard]) {}

    fn show_orders(&mut self, _page: &OrdersPageView) {}

    fn show_navigation(&mut self, _active: NavPage) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    /// Terminal until the next `begin_load`
    Failed(LoadError),
}

/// Identifies one load attempt; only the newest may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub page_size: usize,
    pub locale: NumberLocale,
    /// End of the year-to-date chart
    pub today: NaiveDate,
}

impl DashboardSettings {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: NumberLocale::default(),
            today,
        }
    }
}

pub struct DashboardController<S, B, R>
where
    S: SalesOverviewSurface,
    B: ChartBackend,
    R: Rng,
{
    surface: S,
    charts: ChartRegistry<B>,
    rng: R,
    settings: DashboardSettings,
    phase: LoadPhase,
    data: Option<DashboardData>,
    orders: Option<OrdersView>,
    active_nav: NavPage,
    generation: u64,
}

impl<S, B, R> DashboardController<S, B, R>
where
    S: SalesOverviewSurface,
    B: ChartBackend,
    R: Rng,
{
    pub fn new(surface: S, backend: B, rng: R, settings: DashboardSettings) -> Self {
        Self {
            surface,
            charts: ChartRegistry::new(backend),
            rng,
            settings,
            phase: LoadPhase::Idle,
            data: None,
            orders: None,
            active_nav: NavPage::default(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub fn orders(&self) -> Option<&OrdersView> {
        self.orders.as_ref()
    }

    pub fn active_nav(&self) -> NavPage {
        self.active_nav
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn charts(&self) -> &ChartRegistry<B> {
        &self.charts
    }

    /// Enters `Loading`. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        log::info!("dashboard load #{} started", self.generation);
        self.surface.show_loading();
        LoadTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale or
    /// the load was already completed.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<DashboardData, LoadError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::warn!(
                "discarding stale dashboard load #{} (current #{})",
                ticket.0,
                self.generation
            );
            return false;
        }
        if self.phase != LoadPhase::Loading {
            return false;
        }

        match result {
            Ok(data) => {
                log::info!(
                    "dashboard load #{} ready with {} orders",
                    ticket.0,
                    data.recent_orders.len()
                );
                self.orders = Some(OrdersView::new(
                    data.recent_orders.clone(),
                    self.settings.page_size,
                ));
                self.data = Some(data);
                self.phase = LoadPhase::Ready;
                self.surface.show_ready();
                self.render_metrics();
                self.render_charts();
                self.render_orders();
            }
            Err(error) => {
                log::error!("dashboard load #{} failed: {}", ticket.0, error);
                self.data = None;
                self.orders = None;
                self.charts.destroy_all();
                self.surface.show_error(&error);
                self.phase = LoadPhase::Failed(error);
            }
        }
        true
    }

    /// Filters the orders table and returns to page 1.
    pub fn on_search_input(&mut self, text: &str) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(orders) = self.orders.as_mut() else {
            return false;
        };
        orders.set_search_term(text);
        self.render_orders();
        true
    }

    pub fn on_page_select(&mut self, page: usize) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(orders) = self.orders.as_mut() else {
            return false;
        };
        orders.select_page(page);
        self.render_orders();
        true
    }

    /// Unknown keys are ignored.
    pub fn on_nav_select(&mut self, key: &str) -> bool {
        let Some(page) = NavPage::from_key(key) else {
            log::warn!("unknown navigation key '{}'", key);
            return false;
        };
        log::info!("navigating to {}", page.key());
        self.active_nav = page;
        if self.surface.is_mounted(Region::Navigation) {
            self.surface.show_navigation(page);
        }
        true
    }

    /// Releases every live chart.
    pub fn teardown(&mut self) {
        self.charts.destroy_all();
    }

    fn render_metrics(&mut self) {
        if !self.surface.is_mounted(Region::Metrics) {
            return;
        }
        if let Some(data) = &self.data {
            let metrics = summary_metrics(&data.summary, &self.settings.locale);
            self.surface.show_metrics(&metrics);
        }
    }

    fn render_charts(&mut self) {
        if !self.surface.is_mounted(Region::Charts) {
            return;
        }
        let daily = daily_sales_chart(&mut self.rng, self.settings.today);
        self.charts.render_checked(ChartName::DailySales, daily);
        self.charts
            .render_checked(ChartName::AverageOrder, average_order_chart());
    }

    fn render_orders(&mut self) {
        if !self.surface.is_mounted(Region::Orders) {
            return;
        }
        if let Some(orders) = &self.orders {
            let page = orders.to_page_view(&self.settings.locale);
            self.surface.show_orders(&page);
        }
    }
}

impl<S, B, R> Drop for DashboardController<S, B, R>
where
    S: SalesOverviewSurface,
    B: ChartBackend,
    R: Rng,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::source::{DashboardDataSource, StaticDashboardSource};
    use crate::shared::chart::testing::RecordingBackend;
    use crate::shared::pagination::PageButton;
    use futures::executor::block_on;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        events: Vec<&'static str>,
        metrics: Vec<MetricCard>,
        orders: Option<OrdersPageView>,
        nav: Option<NavPage>,
        error: Option<LoadError>,
        unmounted: Vec<Region>,
    }

    impl SalesOverviewSurface for RecordingSurface {
        fn is_mounted(&self, region: Region) -> bool {
            !self.unmounted.contains(&region)
        }

        fn show_loading(&mut self) {
            self.events.push("loading");
        }

        fn show_ready(&mut self) {
            self.events.push("ready");
        }

        fn show_error(&mut self, error: &LoadError) {
            self.events.push("error");
            self.error = Some(error.clone());
        }

        fn show_metrics(&mut self, metrics: &[MetricCard]) {
            self.events.push("metrics");
            self.metrics = metrics.to_vec();
        }

        fn show_orders(&mut self, page: &OrdersPageView) {
            self.events.push("orders");
            self.orders = Some(page.clone());
        }

        fn show_navigation(&mut self, active: NavPage) {
            self.events.push("navigation");
            self.nav = Some(active);
        }
    }

    type TestController = DashboardController<RecordingSurface, RecordingBackend, StdRng>;

    fn controller_with(surface: RecordingSurface) -> TestController {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        DashboardController::new(
            surface,
            RecordingBackend::default(),
            StdRng::seed_from_u64(5),
            DashboardSettings::new(today),
        )
    }

    fn load(controller: &mut TestController) -> bool {
        let ticket = controller.begin_load();
        let result = block_on(StaticDashboardSource.fetch_dashboard_data());
        controller.complete_load(ticket, result)
    }

    #[test]
    fn test_load_renders_everything() {
        let mut controller = controller_with(RecordingSurface::default());
        assert_eq!(controller.phase(), &LoadPhase::Idle);
        assert!(load(&mut controller));
        assert!(controller.is_ready());

        let surface = controller.surface();
        assert_eq!(surface.events, vec!["loading", "ready", "metrics", "orders"]);

        let labels: Vec<&str> = surface.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Total sales",
                "Total orders",
                "Average order value",
                "Returning customer rate"
            ]
        );

        let orders = surface.orders.as_ref().unwrap();
        assert_eq!(orders.rows.len(), 5);
        assert_eq!(orders.buttons, vec![PageButton::Page(1)]);

        assert!(controller.charts().is_rendered(ChartName::DailySales));
        assert!(controller.charts().is_rendered(ChartName::AverageOrder));
    }

    #[test]
    fn test_search_rerenders_only_orders() {
        let mut controller = controller_with(RecordingSurface::default());
        load(&mut controller);
        let before = controller.surface().events.len();
        let chart_events = controller.charts().backend().events.len();

        assert!(controller.on_search_input("PENDING"));

        let surface = controller.surface();
        assert_eq!(&surface.events[before..], &["orders"]);
        let orders = surface.orders.as_ref().unwrap();
        assert_eq!(orders.rows.len(), 1);
        assert_eq!(orders.rows[0].id, "ORD003");
        assert_eq!(orders.current_page, 1);
        assert_eq!(orders.search_term, "PENDING");
        assert_eq!(controller.charts().backend().events.len(), chart_events);
    }

    #[test]
    fn test_page_select_is_clamped() {
        let mut controller = controller_with(RecordingSurface::default());
        load(&mut controller);
        assert!(controller.on_page_select(7));
        assert_eq!(controller.orders().unwrap().page(), 1);
    }

    #[test]
    fn test_events_ignored_until_ready() {
        let mut controller = controller_with(RecordingSurface::default());
        assert!(!controller.on_search_input("john"));
        controller.begin_load();
        assert!(!controller.on_page_select(1));
        assert!(controller.surface().orders.is_none());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut controller = controller_with(RecordingSurface::default());
        let first = controller.begin_load();
        let second = controller.begin_load();

        let stale = block_on(StaticDashboardSource.fetch_dashboard_data());
        assert!(!controller.complete_load(first, stale));
        assert_eq!(controller.phase(), &LoadPhase::Loading);

        let fresh = block_on(StaticDashboardSource.fetch_dashboard_data());
        assert!(controller.complete_load(second, fresh));
        assert!(controller.is_ready());

        // completing the same ticket twice has no effect
        let again = block_on(StaticDashboardSource.fetch_dashboard_data());
        assert!(!controller.complete_load(second, again));
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let mut controller = controller_with(RecordingSurface::default());
        let ticket = controller.begin_load();
        let error = LoadError::Network("offline".to_string());
        assert!(controller.complete_load(ticket, Err(error.clone())));

        assert_eq!(controller.phase(), &LoadPhase::Failed(error.clone()));
        assert_eq!(controller.surface().error, Some(error));
        assert_eq!(controller.surface().events, vec!["loading", "error"]);
        assert!(controller.data().is_none());
        assert!(!controller.on_search_input("john"));
        assert!(controller.charts().is_empty());
    }

    #[test]
    fn test_reload_replaces_charts() {
        let mut controller = controller_with(RecordingSurface::default());
        load(&mut controller);
        load(&mut controller);

        let backend = controller.charts().backend();
        assert_eq!(backend.live.len(), 2);
        assert_eq!(
            backend.events,
            vec![
                "create daily_sales #1",
                "create average_order #2",
                "destroy #1",
                "create daily_sales #3",
                "destroy #2",
                "create average_order #4",
            ]
        );
    }

    #[test]
    fn test_unmounted_regions_are_skipped() {
        let surface = RecordingSurface {
            unmounted: vec![Region::Charts, Region::Metrics],
            ..Default::default()
        };
        let mut controller = controller_with(surface);
        load(&mut controller);

        assert_eq!(controller.surface().events, vec!["loading", "ready", "orders"]);
        assert!(controller.charts().is_empty());
        assert!(controller.charts().backend().events.is_empty());
    }

    #[test]
    fn test_null_surface_still_tracks_state() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let mut controller = DashboardController::new(
            NullSurface,
            RecordingBackend::default(),
            StdRng::seed_from_u64(1),
            DashboardSettings::new(today),
        );
        let ticket = controller.begin_load();
        let result = block_on(StaticDashboardSource.fetch_dashboard_data());
        controller.complete_load(ticket, result);

        assert!(controller.is_ready());
        assert!(controller.on_search_input("jane"));
        assert_eq!(controller.orders().unwrap().filtered().len(), 1);
        assert!(controller.charts().is_empty());
    }

    #[test]
    fn test_nav_select() {
        let mut controller = controller_with(RecordingSurface::default());
        assert!(controller.on_nav_select("this-season"));
        assert_eq!(controller.active_nav(), NavPage::ThisSeason);
        assert_eq!(controller.surface().nav, Some(NavPage::ThisSeason));

        assert!(!controller.on_nav_select("reports"));
        assert_eq!(controller.active_nav(), NavPage::ThisSeason);
    }
}
