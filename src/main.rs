use person_gateway::{
    config::Config,
    create_api_routes,
    logging::init_tracing,
    services::{FixedPersonId, PersonIdSource},
};
use std::{panic, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    init_tracing();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    let ids: Arc<dyn PersonIdSource> = Arc::new(FixedPersonId::default());

    let app_routes = create_api_routes(ids)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;

    info!("🚀 Server running on http://{}", config.server_address());

    axum::serve(listener, app_routes).await?;
    Ok(())
}
