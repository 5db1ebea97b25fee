//! Application-wide constants

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Fixed lifetime of an issued session.
pub const SESSION_LIFETIME_DAYS: i64 = 7;

/// Signing secret used when none is configured outside production.
pub const DEVELOPMENT_SECRET: &str = "development-secret-key";

pub const COOKIE_PATH: &str = "/";
