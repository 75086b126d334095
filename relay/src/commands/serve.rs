use anyhow::Context;
use relay_api_rest::{RestServer, RestServerConfig};
use relay_config::Config;
use relay_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use relay_core_health_impl::HealthServiceImpl;
use relay_email_contracts::EmailService;
use tracing::{info, warn};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.smtp)?;
    match email.ping().await {
        Ok(()) => info!("SMTP server is reachable"),
        // Dispatch opens its own connection per message, so a failed
        // probe at startup is only a warning.
        Err(err) => warn!("SMTP connection test failed: {err:#}"),
    }

    let health = HealthServiceImpl::new();
    let contact = ContactServiceImpl::new(
        email,
        ContactServiceConfig {
            recipient: config.contact.recipient.clone(),
        },
    );

    let server = RestServer::new(
        health,
        contact,
        RestServerConfig {
            port: config.http.port,
            client_origin: config.http.client_origin.clone(),
            development: config.mode.is_development(),
        },
    );

    info!(
        mode = ?config.mode,
        client_origin = %config.http.client_origin,
        "Starting http server on 0.0.0.0:{}",
        config.http.port
    );
    tokio::select! {
        result = server.serve() => result,
        result = shutdown_signal() => result,
    }
}

async fn shutdown_signal() -> anyhow::Result<()> {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for ctrl-c")?;
        }
        () = terminate_signal() => {}
    }
    info!("Shutting down");
    Ok(())
}

#[cfg(unix)]
async fn terminate_signal() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(err) => {
            warn!("Failed to install SIGTERM handler: {err}");
            std::future::pending().await
        }
    }
}

#[cfg(not(unix))]
async fn terminate_signal() {
    std::future::pending().await
}
