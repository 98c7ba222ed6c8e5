pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod server;
pub mod service;
pub mod shutdown;
pub mod state;
pub mod validation;

pub use config::{CliArgs, ServerConfig};
pub use error::ApiError;
pub use logging::{LoggingConfig, init_logging};

use anyhow::Result;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let config = Arc::new(config);
    let state = Arc::new(AppState::new(config.clone()));
    let router = server::router(state);

    let listener = TcpListener::bind(config.http_bind_address).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(bind = %actual_addr, "orders API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
