use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use session_security::{
    Clock, SameSite, SessionAuthenticator, SigningSecret, VerificationFailure,
};
use session_shared::Environment;

const SECRET: &str = "integration-test-secret";

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn authenticator(environment: Environment) -> SessionAuthenticator {
    SessionAuthenticator::new(&SigningSecret::new(SECRET), environment)
}

#[test]
fn issue_then_verify_returns_same_identity() {
    let auth = authenticator(Environment::Development);
    let before = Utc::now().timestamp_millis();
    let issued = auth.issue("user123", "test@example.com").unwrap();
    let after = Utc::now().timestamp_millis();

    let claims = auth.verify(&issued.token).unwrap();
    assert_eq!(claims.user_id, "user123");
    assert_eq!(claims.email, "test@example.com");

    let seven_days = Duration::days(7).num_milliseconds();
    let expires = claims.expires_at.timestamp_millis();
    assert!(expires >= before + seven_days);
    assert!(expires <= after + seven_days);
}

#[test]
fn round_trip_preserves_unusual_identities() {
    let auth = authenticator(Environment::Development);
    let long_id = "a".repeat(1000);
    let cases = [
        ("", "test@example.com"),
        ("user123", ""),
        ("user@#$%^&*()123", "test@example.com"),
        (long_id.as_str(), "test@example.com"),
        ("user123", "用户@example.com"),
        ("  padded  ", " spaced@example.com "),
    ];

    for (user_id, email) in cases {
        let issued = auth.issue(user_id, email).unwrap();
        let claims = auth.verify(&issued.token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, email);
    }
}

#[test]
fn cookie_attributes_follow_environment() {
    let dev = authenticator(Environment::Development)
        .issue("user123", "test@example.com")
        .unwrap();
    assert_eq!(dev.cookie.name, "auth-token");
    assert!(dev.cookie.http_only);
    assert_eq!(dev.cookie.same_site, SameSite::Lax);
    assert_eq!(dev.cookie.path, "/");
    assert!(!dev.cookie.secure);
    assert_eq!(dev.cookie.expires, dev.claims.expires_at);

    let prod = authenticator(Environment::Production)
        .issue("user123", "test@example.com")
        .unwrap();
    assert!(prod.cookie.secure);
    assert!(prod.cookie.http_only);
    assert_eq!(prod.cookie.same_site, SameSite::Lax);
    assert_eq!(prod.claims.user_id, dev.claims.user_id);
    assert_eq!(prod.claims.email, dev.claims.email);
}

#[test]
fn token_is_three_part_jwt_with_named_claims() {
    let issued = authenticator(Environment::Development)
        .issue("user123", "test@example.com")
        .unwrap();

    let parts: Vec<&str> = issued.token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let payload: serde_json::Value =
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
    assert_eq!(payload["userId"], "user123");
    assert_eq!(payload["email"], "test@example.com");
    assert!(payload["expiresAt"].is_string());
    assert!(payload["iat"].is_i64());
    assert!(payload["exp"].is_i64());
}

#[test]
fn different_users_get_different_tokens() {
    let auth = authenticator(Environment::Development);
    let first = auth.issue("user1", "user1@example.com").unwrap();
    let second = auth.issue("user2", "user2@example.com").unwrap();
    assert_ne!(first.token, second.token);
}

#[test]
fn expired_token_is_rejected() {
    let secret = SigningSecret::new(SECRET);
    let issued_at = Utc::now();
    let issuer = SessionAuthenticator::with_clock(
        &secret,
        Environment::Development,
        Arc::new(FixedClock(issued_at)),
    );
    let issued = issuer.issue("user123", "test@example.com").unwrap();

    let later = SessionAuthenticator::with_clock(
        &secret,
        Environment::Development,
        Arc::new(FixedClock(issued.claims.expires_at + Duration::seconds(1))),
    );
    assert_eq!(later.verify(&issued.token), Err(VerificationFailure::Expired));
}

#[test]
fn tampered_token_is_rejected() {
    let auth = authenticator(Environment::Development);
    let token = auth.issue("user123", "test@example.com").unwrap().token;

    for index in 0..token.len() {
        let mut bytes = token.clone().into_bytes();
        if bytes[index] == b'.' {
            continue;
        }
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(
            auth.verify(&tampered),
            Err(VerificationFailure::InvalidSignature),
            "byte {} altered without detection",
            index
        );
    }
}

#[test]
fn foreign_and_malformed_tokens_are_rejected() {
    let auth = authenticator(Environment::Development);
    let foreign = SessionAuthenticator::new(&SigningSecret::new("someone-else"), Environment::Development)
        .issue("user123", "test@example.com")
        .unwrap();

    assert_eq!(auth.verify(&foreign.token), Err(VerificationFailure::InvalidSignature));
    for malformed in ["", "not-a-token", "a.b", "a.b.c", "a.b.c.d", "...."] {
        assert_eq!(
            auth.verify(malformed),
            Err(VerificationFailure::InvalidSignature),
            "accepted {:?}",
            malformed
        );
    }
}

#[test]
fn token_with_only_session_claims_is_accepted() {
    let auth = authenticator(Environment::Development);
    let expires_at = Utc::now() + Duration::days(7);

    let mut header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256);
    header.typ = None;
    let token = jsonwebtoken::encode(
        &header,
        &serde_json::json!({
            "userId": "user123",
            "email": "test@example.com",
            "expiresAt": expires_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }),
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let claims = auth.verify(&token).unwrap();
    assert_eq!(claims.user_id, "user123");
    assert_eq!(claims.email, "test@example.com");
    assert_eq!(claims.expires_at.timestamp_millis(), expires_at.timestamp_millis());
}

#[test]
fn token_with_numeric_expiry_is_accepted() {
    let auth = authenticator(Environment::Development);
    let expires_at = Utc::now() + Duration::days(7);

    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &serde_json::json!({
            "userId": "user123",
            "email": "test@example.com",
            "expiresAt": expires_at.timestamp_millis(),
            "iat": 1,
        }),
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(auth.verify(&token).unwrap().expires_at.timestamp_millis(), expires_at.timestamp_millis());
}
