pub mod d400_sales_overview;
pub mod d401_this_season;

pub use d400_sales_overview::ui::SalesOverviewDashboard;
pub use d401_this_season::ui::SeasonDashboard;
