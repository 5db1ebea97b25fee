use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use session_security::{SessionAuthenticator, VerificationFailure};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::extract::session_token;

/// Session guard - rejects requests without a valid session cookie and
/// exposes the verified `SessionClaims` to handlers via request extensions.
pub async fn require_session(
    State(authenticator): State<Arc<SessionAuthenticator>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(request.headers()).ok_or_else(|| {
        debug!("Guarded request without session cookie");
        ApiError::Unauthorized("Missing session cookie".to_string())
    })?;
    let claims = authenticator.verify(token).map_err(rejection)?;
    debug!(user_id = %claims.user_id, "Session verified");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Audit log for a rejected session on a guarded route.
fn rejection(failure: VerificationFailure) -> ApiError {
    match failure {
        VerificationFailure::Expired => debug!("Session expired"),
        VerificationFailure::InvalidSignature => warn!("Session token failed verification"),
    }
    ApiError::from(failure)
}
