use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use delivery_server::config::{ConfigError, ServerConfig};
use delivery_server::load::{self, LoadError};
use delivery_server::service::DeliveryService;
use delivery_server::store::PointRouteStore;
use delivery_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "delivery_server=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let config = ServerConfig::from_env()?;

    let service = DeliveryService::new(Arc::new(PointRouteStore::new()), config.planner.clone());
    let summary = match &config.map_file {
        Some(path) => load::load_map_file(&service, path)?,
        None => load::load_default_map(&service)?,
    };
    info!(
        points = summary.points,
        routes = summary.routes,
        "initial map ready"
    );

    let state = AppState::new(service, config.admin.clone(), config.map_file.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "delivery server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("delivery server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
}
