use std::{fmt, io};

/// Crate-wide `Result` type using [`GatewayError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Top-level error type for gateway operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum GatewayError {
    /// Server-facing failures: unreachable hosts, rejected credentials,
    /// servers without databases, and anything else the driver reports
    /// during an operation.
    Configuration(ConfigurationError),

    /// Problems with the local settings file.
    Settings(SettingsError),

    /// I/O errors.
    Io(io::Error),
}

/// The single runtime taxonomy for gateway operations.
///
/// Every driver failure crossing a gateway boundary is re-wrapped into one
/// of these variants; callers present the message and move on. Nothing is
/// retried.
#[derive(Debug)]
pub enum ConfigurationError {
    /// The server could not be reached.
    Unreachable { server: String, message: String },

    /// The server reported no databases at all.
    NoDatabases,

    /// The credential probe was rejected.
    AuthenticationFailed { message: String },

    /// Any other driver failure during an operation.
    Driver(mongodb::error::Error),
}

/// Settings-file specific errors.
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file not found.
    FileNotFound(String),

    /// Invalid settings format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Configuration(e) => write!(f, "Configuration error: {e}"),
            GatewayError::Settings(e) => write!(f, "Settings error: {e}"),
            GatewayError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::Unreachable { server, message } => {
                write!(f, "Cannot reach MongoDB server at {server}: {message}")
            }
            ConfigurationError::NoDatabases => write!(f, "No databases were found"),
            ConfigurationError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {message}")
            }
            ConfigurationError::Driver(e) => write!(f, "MongoDB error: {e}"),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::FileNotFound(path) => write!(f, "Settings file not found: {path}"),
            SettingsError::InvalidFormat(msg) => write!(f, "Invalid settings format: {msg}"),
            SettingsError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for GatewayError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for SettingsError {}

/* ========================= Conversions to GatewayError ========================= */

impl From<io::Error> for GatewayError {
    fn from(err: io::Error) -> Self {
        GatewayError::Io(err)
    }
}

impl From<ConfigurationError> for GatewayError {
    fn from(err: ConfigurationError) -> Self {
        GatewayError::Configuration(err)
    }
}

impl From<SettingsError> for GatewayError {
    fn from(err: SettingsError) -> Self {
        GatewayError::Settings(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_databases_message() {
        let err = GatewayError::from(ConfigurationError::NoDatabases);
        assert_eq!(
            err.to_string(),
            "Configuration error: No databases were found"
        );
    }

    #[test]
    fn test_unreachable_message_names_server() {
        let err = ConfigurationError::Unreachable {
            server: "db.internal:27017".to_string(),
            message: "server selection timeout".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("db.internal:27017"));
        assert!(text.contains("server selection timeout"));
    }

    #[test]
    fn test_settings_value_message() {
        let err = SettingsError::InvalidValue {
            field: "server.port".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value '0' for field 'server.port'");
    }
}
