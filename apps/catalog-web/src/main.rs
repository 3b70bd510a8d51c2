//! Catalog Web - server-rendered product catalog

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::{handlers, InMemoryProductRepository, ProductService};
use std::time::Duration;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The catalog is an in-memory store: products live for the lifetime
    // of the process and are lost on restart.
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);

    let pages = Router::new().nest("/product", handlers::router(service)?);
    let app = create_router(pages).merge(health_router(config.app.clone()));

    info!("Starting Catalog Web on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async {
        info!("Shutting down: nothing to flush, the catalog store is in-memory");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog Web shutdown complete");
    Ok(())
}
