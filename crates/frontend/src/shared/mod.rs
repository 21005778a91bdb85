pub mod api_utils;
pub mod chart_js;
pub mod components;
pub mod config;
pub mod icons;
