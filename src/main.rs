use appointment_relay::{router, AppConfig, AppState};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;
    info!(backend = %config.backend_base_url, relay = %config.relay_url, "configuration loaded");

    let shared_state = Arc::new(AppState::new(config));
    let app = router(shared_state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("🚀 Server running on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
