//! # Session Shared
//! 
//! Shared configuration, constants, errors, and telemetry for the session service.

pub mod constants;
pub mod environment;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use environment::Environment;
pub use error::AppError;
