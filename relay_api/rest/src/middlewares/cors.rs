use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Grant cross-origin access to the single configured frontend origin.
/// Preflights are answered here and never reach the routes.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>, origin: HeaderValue) -> Router<S> {
    // A list keeps the allow-origin header conditional on the request
    // origin actually matching; a bare exact value is echoed always.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    router.layer(cors).layer(from_fn(preflight_status))
}

// The CORS layer answers preflights with 200; browsers are fine with
// that, but the documented contract is 204.
async fn preflight_status(request: Request, next: Next) -> Response {
    let preflight = request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    let mut response = next.run(request).await;
    if preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
