use axum::http::{header, Method};
use axum::middleware;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::request_logger::request_logger;
use crate::{handlers, AppState};

/// All application routes plus the static `dist` fallback.
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let dist_dir = state.config.server.dist_dir.clone();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/d400/dashboard",
            get(handlers::d400_sales_overview::get_dashboard),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(dist_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::dashboards::d400_sales_overview::{mock, DashboardData};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(AppState {
            config: Arc::new(Config::default()),
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_dashboard_json() {
        let response = app()
            .oneshot(
                Request::get("/api/d400/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["summary"]["totalSales"], 12500.0);
        assert_eq!(json["recentOrders"][2]["status"], "Pending");

        let data: DashboardData = serde_json::from_value(json).unwrap();
        assert_eq!(data, mock::dashboard_data());
    }
}
