//! # Session API
//! 
//! HTTP transport for session tokens: cookie handling, session guard,
//! extractors, and handlers.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
