pub mod dashboard;

pub use dashboard::SeasonDashboard;
