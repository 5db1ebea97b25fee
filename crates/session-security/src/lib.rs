//! # Session Security
//! 
//! Stateless session tokens: signing secret, claims, cookie descriptor, and
//! the authenticator that issues and verifies them.

pub mod clock;
pub mod cookie;
pub mod error;
pub mod jwt;
pub mod secret;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use cookie::{CookieDescriptor, SameSite};
pub use error::{SecretError, SigningError, VerificationFailure};
pub use jwt::SessionAuthenticator;
pub use secret::SigningSecret;
pub use session::{IssuedSession, SessionClaims};
