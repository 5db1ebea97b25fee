//! Signing secret

use std::fmt;

use session_shared::{constants::DEVELOPMENT_SECRET, Environment};
use tracing::warn;

use crate::error::SecretError;

/// Symmetric key for session tokens. Constructed once at startup and never
/// printed: `Debug` is redacted.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Picks the configured secret, or the development fallback outside
    /// production. An empty configured value counts as unset.
    pub fn resolve(environment: Environment, configured: Option<&str>) -> Result<Self, SecretError> {
        match configured.filter(|s| !s.is_empty()) {
            Some(secret) => Ok(Self::new(secret)),
            None if environment.is_production() => Err(SecretError::MissingInProduction),
            None => {
                warn!(
                    environment = %environment,
                    "No session secret configured, using the development fallback secret"
                );
                Ok(Self::new(DEVELOPMENT_SECRET))
            }
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
