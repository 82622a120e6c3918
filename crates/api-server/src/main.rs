use api_server::{create_router, AppState};
use application::ContentApp;
use config::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api_server=debug,tower_http=debug")),
        )
        .init();

    info!("🚀 Starting Content API Server");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("🌐 API server will bind to: {}", config.api_address());

    // Refuse to serve if the store is unreachable
    let content_app = match ContentApp::connect(&config.database_url).await {
        Ok(app) => Arc::new(app),
        Err(e) => {
            error!("❌ Error connecting to database: {}", e);
            return Err(e.into());
        }
    };

    let app = create_router(AppState::new(content_app.clone()));

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET    /          - Health check");
    info!("   GET    /get       - List all content");
    info!("   POST   /post      - Create content");
    info!("   DELETE /delete    - Delete content by value");
    info!("   PUT    /update    - Replace content by value");
    info!("   GET    /totalnum  - Count content");

    let served = axum::serve(listener, app).await;
    content_app.shutdown().await;
    served?;

    Ok(())
}
