use std::sync::Arc;

use axum::extract::FromRef;
use session_security::SessionAuthenticator;
use session_shared::config::AppConfig;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub authenticator: Arc<SessionAuthenticator>,
    pub config: Arc<AppConfig>,
}
