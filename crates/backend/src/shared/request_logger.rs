//! Request logging middleware: one line per request.
//!
//! The body is never buffered; its size comes from `Content-Length` or the
//! body's exact size hint, so static bundles stream through untouched.

use axum::body::{Body, HttpBody};
use axum::http::header::CONTENT_LENGTH;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::number_format::{format_count, NumberLocale};
use std::time::Instant;

/// Body size in bytes, when known before streaming.
pub fn response_size(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// `Some(1234567)` -> `1,234,567`, unknown sizes as `-`.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format_count(bytes as f64, &NumberLocale::en_usd()),
        None => "-".to_string(),
    }
}

/// Logs status, method, path, duration and body size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    let size = format_size(response_size(&response));
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!("{} {} {} | {}ms | {} B", status.as_u16(), method, path, elapsed, size);
    } else {
        tracing::info!("{} {} {} | {}ms | {} B", status.as_u16(), method, path, elapsed, size);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[test]
    fn test_size_from_header_or_body() {
        let sized = Response::new(Body::from("hello"));
        assert_eq!(response_size(&sized), Some(5));

        let mut declared = Response::new(Body::empty());
        declared
            .headers_mut()
            .insert(CONTENT_LENGTH, "1234567".parse().unwrap());
        assert_eq!(response_size(&declared), Some(1234567));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(Some(0)), "0");
        assert_eq!(format_size(Some(1234567)), "1,234,567");
        assert_eq!(format_size(None), "-");
    }

    #[tokio::test]
    async fn test_response_passes_through() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(request_logger));

        let response = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"pong");
    }
}
