//! JWT session token handling

use std::sync::Arc;

use chrono::{DateTime, Duration, Timelike, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use session_shared::{constants::SESSION_LIFETIME_DAYS, Environment};
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::cookie::CookieDescriptor;
use crate::error::{SigningError, VerificationFailure};
use crate::secret::SigningSecret;
use crate::session::{millis_rfc3339, IssuedSession, SessionClaims};

/// Payload written on issue: the session claims plus registered claims.
/// `jti` keeps tokens distinct even when issued within the same millisecond.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuedPayload {
    user_id: String,
    email: String,
    #[serde(with = "millis_rfc3339")]
    expires_at: DateTime<Utc>,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Payload accepted on verify. Only the session claims are required;
/// registered claims are optional and ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresentedPayload {
    user_id: String,
    email: String,
    #[serde(with = "millis_rfc3339")]
    expires_at: DateTime<Utc>,
}

/// Issues and verifies stateless session tokens (HS256).
///
/// Holds only immutable state, so one instance is shared across requests
/// behind an `Arc`.
pub struct SessionAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    environment: Environment,
    clock: Arc<dyn Clock>,
}

impl SessionAuthenticator {
    pub fn new(secret: &SigningSecret, environment: Environment) -> Self {
        Self::with_clock(secret, environment, Arc::new(SystemClock))
    }

    pub fn with_clock(secret: &SigningSecret, environment: Environment, clock: Arc<dyn Clock>) -> Self {
        // Expiry is checked against `expiresAt` with the injected clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            environment,
            clock,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn lifetime() -> Duration {
        Duration::days(SESSION_LIFETIME_DAYS)
    }

    /// Signs a new session for an already authenticated identity. Inputs are
    /// not validated.
    pub fn issue(&self, user_id: &str, email: &str) -> Result<IssuedSession, SigningError> {
        let issued_at = truncate_to_millis(self.clock.now());
        let expires_at = issued_at + Self::lifetime();

        let payload = IssuedPayload {
            user_id: user_id.to_string(),
            email: email.to_string(),
            expires_at,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| SigningError::Signing(e.to_string()))?;

        let claims = SessionClaims {
            user_id: payload.user_id,
            email: payload.email,
            expires_at,
        };
        let cookie = CookieDescriptor::session(token.clone(), expires_at, self.environment);

        Ok(IssuedSession { token, claims, cookie })
    }

    /// Checks signature, structure, and expiry. Does not touch the token's
    /// lifetime.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, VerificationFailure> {
        let payload = decode::<PresentedPayload>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(kind = ?e.kind(), "Session token rejected");
                VerificationFailure::InvalidSignature
            })?;

        let claims = SessionClaims {
            user_id: payload.user_id,
            email: payload.email,
            expires_at: payload.expires_at,
        };

        if claims.is_expired_at(self.clock.now()) {
            return Err(VerificationFailure::Expired);
        }
        Ok(claims)
    }
}

fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    let millis = instant.nanosecond() / 1_000_000 * 1_000_000;
    instant.with_nanosecond(millis).unwrap_or(instant)
}
