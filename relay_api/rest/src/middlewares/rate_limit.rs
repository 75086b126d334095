//! Fixed-window rate limiting per client address, reported through the
//! draft-standard `RateLimit-*` headers (no legacy `X-RateLimit-*` set).

use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use tracing::warn;

use super::client_ip::ClientIp;

pub const MAX_REQUESTS: u32 = 100;
pub const WINDOW: Duration = Duration::from_secs(15 * 60);
/// Expired windows are pruned once the map grows past this.
const PRUNE_THRESHOLD: usize = 1024;

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    limiter: Arc<RateLimiter>,
) -> Router<S> {
    router.layer(from_fn_with_state(limiter, middleware))
}

async fn middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ClientIp>()
        .map(|ip| ip.0)
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let decision = limiter.check(client);
    let mut response = if decision.allowed {
        next.run(request).await
    } else {
        warn!(%client, "rate limit exceeded");
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(RateLimitedBody {
                error: "Muitas requisições. Tente novamente em 15 minutos.",
                retry_after: "15 minutos",
            }),
        )
            .into_response();
        response.headers_mut().insert(
            header::RETRY_AFTER,
            HeaderValue::from(decision.reset_after.as_secs()),
        );
        response
    };

    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static("ratelimit-limit"),
        HeaderValue::from(limiter.max_requests),
    );
    headers.insert(
        HeaderName::from_static("ratelimit-remaining"),
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        HeaderName::from_static("ratelimit-reset"),
        HeaderValue::from(decision.reset_after.as_secs()),
    );
    response
}

#[derive(Serialize)]
struct RateLimitedBody {
    error: &'static str,
    #[serde(rename = "retryAfter")]
    retry_after: &'static str,
}

#[derive(Debug)]
pub struct RateLimiter {
    windows: Mutex<HashMap<IpAddr, Window>>,
    max_requests: u32,
    window: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_REQUESTS, WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Mutex::default(),
            max_requests,
            window,
        }
    }

    pub fn check(&self, client: IpAddr) -> Decision {
        self.check_at(client, Instant::now())
    }

    /// Blocked requests keep counting, so a client hammering the endpoint
    /// does not earn back quota until it stays quiet for a full window.
    fn check_at(&self, client: IpAddr, now: Instant) -> Decision {
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        if windows.len() > PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started_at) < window);
        }

        let entry = windows.entry(client).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(entry.started_at) >= self.window {
            *entry = Window {
                started_at: now,
                count: 0,
            };
        }
        entry.count += 1;

        Decision {
            allowed: entry.count <= self.max_requests,
            remaining: self.max_requests.saturating_sub(entry.count),
            reset_after: self
                .window
                .saturating_sub(now.duration_since(entry.started_at)),
        }
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.windows.lock().unwrap().len()
    }
}
