//! Session error types

use thiserror::Error;

/// Issuance failure. Always a server-side fault, never caused by user input.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Why a presented token was rejected. Callers treat both variants as
/// "not authenticated".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    #[error("Invalid session signature")]
    InvalidSignature,
    #[error("Session expired")]
    Expired,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecretError {
    #[error("A signing secret must be configured in production")]
    MissingInProduction,
}
