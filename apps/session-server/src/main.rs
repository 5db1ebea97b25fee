use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{error, info};

use session_api::{router::build_router, state::AppState};
use session_security::{SessionAuthenticator, SigningSecret};
use session_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    session_shared::telemetry::init_telemetry();

    info!("Session server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(environment = %config.app.env, "Configuration loaded");

    // Resolve the signing secret once for the process lifetime
    let secret = SigningSecret::resolve(config.app.env, config.auth.secret.as_deref())?;
    let authenticator = Arc::new(SessionAuthenticator::new(&secret, config.app.env));

    let state = AppState {
        authenticator,
        config: Arc::new(config.clone()),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
