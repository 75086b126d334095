//! Access logging through `tracing`.

use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use tracing::{info, info_span, Span};

use super::{client_ip::ClientIp, request_id::RequestId};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        tower_http::trace::TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(())
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

fn make_span(request: &Request) -> Span {
    let method = request.method();
    // Path only; query strings and bodies stay out of the log.
    let path = request.uri().path();
    let client_ip = request
        .extensions()
        .get::<ClientIp>()
        .map(ToString::to_string)
        .unwrap_or_default();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(ToString::to_string)
        .unwrap_or_default();
    info_span!("http-request", %method, %path, %client_ip, %request_id)
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    info!(status = %response.status(), ?latency, "request completed");
}
