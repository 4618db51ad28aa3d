//! Per-request access log.

use axum::{body::HttpBody, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request after the inner service has answered.
///
/// # Fields
///
/// - `method` - HTTP method
/// - `uri` - request URI as received
/// - `status` - response status code
/// - `size` - response body length in bytes (`0` if the body has no exact size)
/// - `duration_us` - time spent in the inner service, in microseconds
///
/// # Example Log
///
/// ```text
/// INFO request{method=POST uri=/ version=HTTP/1.1}: got incoming HTTP request method=POST uri=/ status=201 size=30 duration_us=412
/// ```
pub async fn access_log_mw(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response.body().size_hint().exact().unwrap_or(0);
    let duration_us = start.elapsed().as_micros() as u64;

    tracing::info!(
        method = %method,
        uri = %uri,
        status,
        size,
        duration_us,
        "got incoming HTTP request"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryLinkStore;
    use crate::routes::app_router;
    use crate::state::AppState;
    use axum::{Router, body::Body, http, http::StatusCode, middleware, routing::get};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::Level;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_access_log_passes_response_through() {
        let app = Router::new()
            .route("/ping", get(|| async { (StatusCode::ACCEPTED, "pong") }))
            .layer(middleware::from_fn(access_log_mw));

        let response = app
            .oneshot(http::Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.body().size_hint().exact(), Some(4));
    }

    #[tokio::test]
    async fn test_access_log_records_shorten_request() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = app_router(AppState::new(
            Arc::new(MemoryLinkStore::new()),
            "http://localhost:8080",
        ));

        let response = app
            .oneshot(
                http::Request::post("/")
                    .body(Body::from("https://practicum.yandex.ru/"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("got incoming HTTP request"))
            .unwrap_or_else(|| panic!("no access log line in:\n{output}"));

        assert!(line.contains("method=POST"), "{line}");
        assert!(line.contains("uri=/"), "{line}");
        assert!(line.contains("status=201"), "{line}");
        assert!(line.contains("size=30"), "{line}");
        assert!(line.contains("duration_us="), "{line}");
    }
}
