//! Reading the session cookie from requests

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use session_security::{cookie::cookie_value, SessionAuthenticator, SessionClaims};
use session_shared::constants::SESSION_COOKIE_NAME;

/// Raw session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| cookie_value(header, SESSION_COOKIE_NAME))
        .filter(|token| !token.is_empty())
}

/// Verifies the session cookie carried by `headers` without logging the
/// outcome. Absent, tampered, and expired cookies all yield `None`.
pub fn optional_session(headers: &HeaderMap, authenticator: &SessionAuthenticator) -> Option<SessionClaims> {
    session_token(headers).and_then(|token| authenticator.verify(token).ok())
}

/// The verified session, or `None` when the cookie is absent, tampered, or
/// expired. Never rejects the request.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionClaims>);

impl<S> FromRequestParts<S> for OptionalSession
where
    Arc<SessionAuthenticator>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authenticator = Arc::<SessionAuthenticator>::from_ref(state);
        Ok(OptionalSession(optional_session(&parts.headers, &authenticator)))
    }
}
