mod config;
mod mapping_api;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    // Missing upstream settings degrade the console instead of stopping it.
    for var in config.mapping_api.missing_vars() {
        tracing::warn!(%var, "not set; upstream mapping calls will fail");
    }

    let client = mapping_api::MappingApiClient::new(&config.mapping_api).expect("mapping API client init failed");
    let state = state::AppState::new(Arc::new(client));

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mapping review console listening");
    axum::serve(listener, app).await.expect("server failed");
}
