pub mod dashboard;
pub mod orders_table;

pub use dashboard::SalesOverviewDashboard;
