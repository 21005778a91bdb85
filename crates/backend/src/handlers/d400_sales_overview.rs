use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_sales_overview::{mock, DashboardData};
use std::time::Duration;

/// GET /api/d400/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, StatusCode> {
    let mock_config = &state.config.mock;
    if mock_config.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(mock_config.latency_ms)).await;
    }

    if mock_config.fail {
        tracing::error!("d400 dashboard: simulated failure");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let data = mock::dashboard_data();
    tracing::info!(
        "d400 dashboard: {} recent orders",
        data.recent_orders.len()
    );
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{Config, MockConfig};
    use std::sync::Arc;

    fn state(mock: MockConfig) -> AppState {
        AppState {
            config: Arc::new(Config {
                mock,
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_returns_mock_payload() {
        let Json(data) = get_dashboard(State(state(MockConfig::default())))
            .await
            .unwrap();
        assert_eq!(data, mock::dashboard_data());
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let result = get_dashboard(State(state(MockConfig {
            latency_ms: 0,
            fail: true,
        })))
        .await;
        assert_eq!(result.err(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
