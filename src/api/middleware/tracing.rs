//! HTTP request tracing spans.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware that opens one `INFO` span per request.
///
/// The span carries the HTTP method, URI and version, so every event logged
/// while handling the request (including the access log line) is attributed
/// to it. Response logging itself is done by
/// [`crate::api::middleware::access_log`].
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/QrPnX5IU version=HTTP/1.1}: got incoming HTTP request ...
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO))
}
