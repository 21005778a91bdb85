//! Sales overview dashboard: summary metrics, two charts and the recent
//! orders table.

pub mod charts;
pub mod controller;
pub mod dto;
pub mod metrics;
pub mod mock;
pub mod orders;
pub mod source;

pub use controller::{
    DashboardController, DashboardSettings, LoadPhase, LoadTicket, NullSurface, Region,
    SalesOverviewSurface,
};
pub use dto::{DashboardData, Order, OrderStatus, SummaryMetrics};
pub use orders::{OrderRow, OrdersPageView, OrdersView};
pub use source::{DashboardDataSource, LoadError, StaticDashboardSource};
