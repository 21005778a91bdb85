pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;

pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::{MetricGrid, StatCard};
