pub mod chart;
pub mod list;
pub mod metric;
pub mod navigation;
pub mod number_format;
pub mod pagination;
