//! Products API - REST server for the product catalog

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db = connect_from_config_with_retry(config.database.clone(), None).await?;

    run_migrations::<Migrator>(&db, config.app.name).await?;

    // Build REST router
    let api_routes = api::routes(db.clone());
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    // Run server with graceful shutdown
    create_app(app, &config.server).await?;

    info!("Shutting down: closing PostgreSQL connections");
    db.close().await?;

    info!("Products API shutdown complete");
    Ok(())
}
