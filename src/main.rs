/// Main application entry point
use impact_calc::config::AppConfig;
use impact_calc::handlers::AppState;
use impact_calc::routes::build_router;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    let addr = config.bind_addr.clone();
    let state = AppState { config };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("impact_calc service listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
