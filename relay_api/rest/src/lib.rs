use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use relay_core_contact_contracts::ContactService;
use relay_core_health_contracts::HealthService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod models;
mod routes;
mod validation;

/// Maximum accepted request body, JSON or url-encoded alike.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub port: u16,
    /// The one browser origin allowed to call this API.
    pub client_origin: String,
    /// Error responses carry failure details only in development mode.
    pub development: bool,
}

impl<Health: HealthService, Contact: ContactService> RestServer<Health, Contact> {
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let port = self.config.port;
        let router = self.router()?;
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .with_context(|| format!("Failed to bind to port {port}"))?;
        info!("listening on 0.0.0.0:{port}");
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("HTTP server terminated")
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let origin = self
            .config
            .client_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid client origin {:?}", self.config.client_origin))?;

        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .nest(
                "/api",
                routes::contact::router(Arc::new(self.contact), self.config.development),
            )
            .fallback(routes::not_found)
            .layer(DefaultBodyLimit::max(BODY_LIMIT));

        // Per-request order, outermost first: security headers, CORS,
        // client identity, request id, access log, rate limit, panic
        // containment. The limiter sits inside the trace layer so that
        // rejected requests still show up in the log.
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::rate_limit::add(router, Arc::default());
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(router);
        let router = middlewares::cors::add(router, origin);
        let router = middlewares::security_headers::add(router);
        Ok(router)
    }
}
