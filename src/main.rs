mod config;
mod db;
mod operation;
mod panel;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::{AppConfig, StoreConfig};
use services::painting::PaintingStore;
use services::painting_memory::MemoryPaintingStore;
use services::painting_pg::PgPaintingStore;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn PaintingStore> = match &config.store {
        StoreConfig::Postgres(db_config) => {
            let pool = match db::init_pool(db_config).await {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!(error = %e, "database init failed");
                    std::process::exit(1);
                }
            };
            tracing::info!(max_connections = db_config.max_connections, "postgres painting store ready");
            Arc::new(PgPaintingStore::new(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("using in-memory painting store; data is lost on restart");
            Arc::new(MemoryPaintingStore::new())
        }
    };

    let state = state::AppState::new(store, config.panel);
    let app = routes::app(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "paintingmuse listening");
    axum::serve(listener, app).await.expect("server failed");
}
