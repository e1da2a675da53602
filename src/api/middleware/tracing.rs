//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Request tracing for every route of the service.
///
/// One `INFO` span per request (method, URI, version). The start of
/// processing is logged at `DEBUG`, the response at `INFO` with status and
/// latency in milliseconds. Handler logs such as the resolver's
/// `Link resolved` line nest inside the request span.
///
/// ```text
/// DEBUG request{method=POST uri=/api/resolve version=HTTP/1.1}: started processing request
/// DEBUG request{method=POST uri=/api/resolve version=HTTP/1.1}: Link resolved merchant=flipkart strategy="direct" program="fk"
/// INFO request{method=POST uri=/api/resolve version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// INFO request{method=GET uri=/api/detect?url=https://amzn.to/x version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// ```
///
/// Applied once in [`crate::routes::app_router`], outside the `/health`
/// route and the `/api` nest.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
