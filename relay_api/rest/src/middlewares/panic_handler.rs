use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::errors;

/// Convert handler panics into the regular 500 response instead of
/// tearing down the connection.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        // Panic payloads never reach the client, regardless of mode.
        Err(_) => errors::internal_server_error(false, &anyhow::anyhow!("request handler panicked")),
    }
}
