use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::{self, schema_repo};
use mergington::services::seed_service;
use mergington::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(database_url = %config.database_url, "connecting to database");

    let pool = database::connect(&config.database_url)
        .await
        .expect("cannot connect to database");

    schema_repo::ensure_schema(&pool)
        .await
        .expect("cannot create database schema");

    if config.seed_on_startup {
        seed_service::seed_initial_data(&pool)
            .await
            .expect("cannot seed starter activities");
    }

    let app = web::router(pool);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("cannot parse HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.saturating_add(1);
            warn!(%addr, error = %e, fallback_port, "bind failed, trying fallback port");
            let fallback: SocketAddr = format!("{}:{}", config.host, fallback_port)
                .parse()
                .expect("cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("listener has no local address");
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
