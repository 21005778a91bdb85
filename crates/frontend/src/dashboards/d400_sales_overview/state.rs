//! Reactive wiring of the sales overview controller.
//!
//! The controller lives in a local `StoredValue` (chart handles are JS
//! objects); the surface it drives is a set of signals read by the UI.

use super::api;
use crate::shared::chart_js::{self, ChartJsBackend};
use crate::shared::config::DashboardConfig;
use chrono::Utc;
use contracts::dashboards::d400_sales_overview::{
    DashboardController, DashboardDataSource, DashboardSettings, LoadError, LoadPhase,
    OrdersPageView, Region, SalesOverviewSurface,
};
use contracts::shared::metric::MetricCard;
use contracts::shared::navigation::NavPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

pub type Controller = DashboardController<SignalSurface, ChartJsBackend, StdRng>;

#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub phase: RwSignal<LoadPhase>,
    pub metrics: RwSignal<Vec<MetricCard>>,
    pub orders: RwSignal<OrdersPageView>,
    /// Shared with `AppGlobalContext`
    pub active: RwSignal<NavPage>,
}

impl SalesOverviewSurface for SignalSurface {
    fn is_mounted(&self, region: Region) -> bool {
        match region {
            Region::Charts => chart_js::is_available(),
            Region::Metrics | Region::Orders | Region::Navigation => true,
        }
    }

    fn show_loading(&mut self) {
        self.phase.set(LoadPhase::Loading);
    }

    fn show_ready(&mut self) {
        self.phase.set(LoadPhase::Ready);
    }

    fn show_error(&mut self, error: &LoadError) {
        self.phase.set(LoadPhase::Failed(error.clone()));
    }

    fn show_metrics(&mut self, metrics: &[MetricCard]) {
        self.metrics.set(metrics.to_vec());
    }

    fn show_orders(&mut self, page: &OrdersPageView) {
        self.orders.set(page.clone());
    }

    fn show_navigation(&mut self, active: NavPage) {
        self.active.set(active);
    }
}

#[derive(Clone, Copy)]
pub struct SalesOverviewState {
    pub surface: SignalSurface,
    controller: StoredValue<Controller, LocalStorage>,
    source: StoredValue<Rc<dyn DashboardDataSource>, LocalStorage>,
}

impl SalesOverviewState {
    pub fn new(config: &DashboardConfig, active: RwSignal<NavPage>) -> Self {
        let surface = SignalSurface {
            phase: RwSignal::new(LoadPhase::Idle),
            metrics: RwSignal::new(Vec::new()),
            orders: RwSignal::new(OrdersPageView::default()),
            active,
        };
        let settings = DashboardSettings {
            page_size: config.page_size,
            locale: config.number_locale(),
            today: Utc::now().date_naive(),
        };
        let backend = ChartJsBackend::new(settings.locale.clone());
        let rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
        let controller = DashboardController::new(surface, backend, rng, settings);

        Self {
            surface,
            controller: StoredValue::new_local(controller),
            source: StoredValue::new_local(api::data_source(config)),
        }
    }

    /// Starts a load; a newer call supersedes a pending one.
    pub fn load(&self) {
        let Some(ticket) = self.controller.try_update_value(|c| c.begin_load()) else {
            return;
        };
        let controller = self.controller;
        let Some(source) = self.source.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let result = source.fetch_dashboard_data().await;
            if controller
                .try_update_value(|c| c.complete_load(ticket, result))
                .is_none()
            {
                log::debug!("dashboard disposed before the load finished");
            }
        });
    }

    pub fn search(&self, text: &str) {
        self.controller.update_value(|c| {
            c.on_search_input(text);
        });
    }

    pub fn select_page(&self, page: usize) {
        self.controller.update_value(|c| {
            c.on_page_select(page);
        });
    }

    pub fn navigate(&self, key: &str) {
        self.controller.update_value(|c| {
            c.on_nav_select(key);
        });
    }
}
