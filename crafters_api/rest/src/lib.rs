use std::{net::IpAddr, sync::Arc};

use axum::Router;
use crafters_core_careers_contracts::CareersFeatureService;
use crafters_core_contact_contracts::ContactFeatureService;
use crafters_core_health_contracts::HealthFeatureService;
use crafters_utils::Apply;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Careers> {
    health: Health,
    contact: Contact,
    careers: Careers,
    config: Arc<RestServerConfig>,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to submit the forms from a browser. CORS is disabled
    /// when empty.
    pub cors_allowed_origins: Vec<String>,
}

impl<Health, Contact, Careers> RestServer<Health, Contact, Careers>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Careers: CareersFeatureService,
{
    pub fn new(
        health: Health,
        contact: Contact,
        careers: Careers,
        config: Arc<RestServerConfig>,
    ) -> Self {
        Self {
            health,
            contact,
            careers,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port, .. } = *self.config;

        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Starting REST API server on {host}:{port}");

        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let cors_allowed_origins = self.config.cors_allowed_origins.clone();

        Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::careers::router(self.careers.into()))
            .apply(middlewares::panic_handler::add)
            .apply_if(!cors_allowed_origins.is_empty(), |router| {
                middlewares::cors::add(router, &cors_allowed_origins)
            })
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
    }
}
