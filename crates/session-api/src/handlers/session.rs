//! Session HTTP handlers (current session, logout) and the login-side helper

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderName},
    response::{AppendHeaders, IntoResponse},
    Extension, Json,
};
use session_security::{CookieDescriptor, SessionAuthenticator, SessionClaims};
use session_shared::utils::mask_email;
use tracing::info;

use crate::error::ApiError;
use crate::extract::OptionalSession;
use crate::response::ApiResponse;

pub type SetCookie = AppendHeaders<[(HeaderName, String); 1]>;

/// Issues a session for an identity the caller has already authenticated and
/// returns the `Set-Cookie` header to attach to the login response.
pub fn start_session(
    authenticator: &SessionAuthenticator,
    user_id: &str,
    email: &str,
) -> Result<(SetCookie, SessionClaims), ApiError> {
    let issued = authenticator.issue(user_id, email)?;
    info!(
        user_id = %user_id,
        email = %mask_email(email),
        expires_at = %issued.claims.expires_at,
        "Session issued"
    );
    Ok((
        AppendHeaders([(SET_COOKIE, issued.cookie.to_header_value())]),
        issued.claims,
    ))
}

/// Current session handler - GET /api/session
///
/// Answers `data: null` for anonymous requests instead of rejecting them.
pub async fn get_session(
    OptionalSession(claims): OptionalSession,
) -> Json<ApiResponse<SessionClaims>> {
    match claims {
        Some(claims) => Json(ApiResponse::success(claims)),
        None => Json(ApiResponse::empty()),
    }
}

/// Logout handler - DELETE /api/session
///
/// Tokens stay valid until they expire; logout only drops the cookie.
pub async fn logout(
    State(authenticator): State<Arc<SessionAuthenticator>>,
) -> impl IntoResponse {
    let removal = CookieDescriptor::removal(authenticator.environment());
    (
        AppendHeaders([(SET_COOKIE, removal.to_header_value())]),
        Json(ApiResponse::success_with_message((), "Logged out successfully")),
    )
}

/// Guarded identity handler - GET /api/me
pub async fn current_user(
    Extension(claims): Extension<SessionClaims>,
) -> Json<ApiResponse<SessionClaims>> {
    Json(ApiResponse::success(claims))
}
