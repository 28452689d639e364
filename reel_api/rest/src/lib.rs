use std::net::IpAddr;

use axum::Router;
use reel_core_contact_contracts::ContactService;
use reel_core_health_contracts::HealthService;
use reel_di::Build;
use tokio::net::TcpListener;
use tracing::{error, info};

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    config: RestServerConfig,
    health: Health,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    /// Serves the REST API until the process receives ctrl-c.
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind((self.config.host, self.config.port)).await?;
        info!("Listening on {}", listener.local_addr()?);

        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()));
        middlewares::add(router)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down http server"),
        Err(err) => error!("Failed to listen for shutdown signal: {err}"),
    }
}
