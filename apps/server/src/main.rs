//! Sokodash server: one seller's operational dashboard, refreshed on a
//! fixed cadence from the shared store.

mod api;
mod config;
mod error;
mod events;
mod refresh;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use sokodash_core::dashboard::{DashboardService, DashboardServiceTrait};
use sokodash_storage_sqlite::{create_pool, run_migrations, PackageRepository, SellerRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::events::EventBus;
use crate::refresh::RefreshController;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        seller_id = config.seller_id,
        port = config.port,
        database_url = %config.database_url,
        refresh_interval_ms = config.refresh_interval.as_millis() as u64,
        "starting sokodash server"
    );

    let pool = create_pool(&config.database_url)?;
    run_migrations(&pool)?;

    let package_repository = Arc::new(PackageRepository::new(Arc::clone(&pool)));
    let seller_repository = Arc::new(SellerRepository::new(Arc::clone(&pool)));
    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        config.seller_id,
        package_repository,
        seller_repository,
    ));

    let event_bus = EventBus::new(64);
    let (controller, snapshot_rx, status_rx) = RefreshController::new(
        Arc::clone(&dashboard_service),
        config.refresh_interval,
        event_bus.clone(),
    );
    tokio::spawn(controller.run());

    let app = api::router(AppState {
        seller_id: config.seller_id,
        refresh_interval: config.refresh_interval,
        snapshot_rx,
        status_rx,
        event_bus,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
