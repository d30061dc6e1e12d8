use bootcamp_api::config::Config;
use bootcamp_api::geocoder::TableGeocoder;
use bootcamp_api::http::{router, AppState};
use bootcamp_api::lifecycle::DirectorySystem;
use resource_actor::tracing::setup_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::load();
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));
    let app = router(AppState::from_system(&system));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    system.shutdown().await?;
    Ok(())
}
