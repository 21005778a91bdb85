use super::dto::DashboardData;
use super::mock;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to obtain the dashboard payload
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the dashboard payload.
///
/// Futures are `?Send`: the dashboard runs on the single-threaded browser
/// event loop.
#[async_trait(?Send)]
pub trait DashboardDataSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, LoadError>;
}

/// Resolves immediately with the built-in demo payload
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDashboardSource;

#[async_trait(?Send)]
impl DashboardDataSource for StaticDashboardSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, LoadError> {
        Ok(mock::dashboard_data())
    }
}
