use crate::shared::api_utils::api_url;
use crate::shared::config::{DashboardConfig, SourceKind};
use async_trait::async_trait;
use contracts::dashboards::d400_sales_overview::{
    DashboardData, DashboardDataSource, LoadError, StaticDashboardSource,
};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;

pub const DASHBOARD_PATH: &str = "/api/d400/dashboard";

/// Built-in payload after an artificial delay
pub struct MockDashboardSource {
    delay_ms: u32,
}

impl MockDashboardSource {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl DashboardDataSource for MockDashboardSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, LoadError> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        StaticDashboardSource.fetch_dashboard_data().await
    }
}

/// Fetches the payload from the backend.
pub struct HttpDashboardSource {
    url: String,
}

impl HttpDashboardSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait(?Send)]
impl DashboardDataSource for HttpDashboardSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardData, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Http(response.status()));
        }

        response
            .json::<DashboardData>()
            .await
            .map_err(|e| LoadError::Decode(e.to_string()))
    }
}

pub fn data_source(config: &DashboardConfig) -> Rc<dyn DashboardDataSource> {
    match config.source {
        SourceKind::Mock => Rc::new(MockDashboardSource::new(config.delay_ms)),
        SourceKind::Api => Rc::new(HttpDashboardSource::new(api_url(DASHBOARD_PATH))),
    }
}
