use crate::error::kinds::ConfigurationError;

/// Classify a driver error into the gateway's configuration taxonomy.
///
/// This uses the driver's typed error structures directly instead of string
/// parsing. Authentication rejections and unreachable-host conditions get
/// their own variants; anything else is carried as an opaque driver error
/// inside the same taxonomy.
pub fn classify_driver_error(
    server: &str,
    error: mongodb::error::Error,
) -> ConfigurationError {
    use mongodb::error::ErrorKind;

    match error.kind.as_ref() {
        ErrorKind::Authentication { message, .. } => ConfigurationError::AuthenticationFailed {
            message: message.clone(),
        },
        ErrorKind::ServerSelection { message, .. } => ConfigurationError::Unreachable {
            server: server.to_string(),
            message: message.clone(),
        },
        ErrorKind::DnsResolve { message, .. } => ConfigurationError::Unreachable {
            server: server.to_string(),
            message: message.clone(),
        },
        ErrorKind::Io(io_error) => ConfigurationError::Unreachable {
            server: server.to_string(),
            message: io_error.to_string(),
        },
        _ => ConfigurationError::Driver(error),
    }
}
