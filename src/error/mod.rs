//! Error handling for gateway operations.
//!
//! All server-facing failures share one taxonomy: a configuration error
//! wrapping the underlying connectivity, authentication, or driver failure.
//! Driver errors are caught and re-wrapped at the boundary of each public
//! gateway operation; nothing is retried or recovered internally.

pub mod kinds;
pub mod mongo;

// Re-export commonly used types
pub use kinds::{ConfigurationError, GatewayError, Result, SettingsError};
pub use mongo::classify_driver_error;
