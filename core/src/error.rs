use serde::Serialize;
use thiserror::Error;

/// Unified error type for the safety assistant.
///
/// The resolver and classifier themselves never fail; this covers the
/// surrounding plumbing (settings, delayed replies, IO) and serializes to
/// JSON for `--format json` output.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Reply superseded: request {id}")]
    Superseded { id: u64 },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl AppError {
    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a Not Found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A superseded reply is answered by the newer request
            // IO issues may be transient
            Self::Superseded { .. } | Self::Io { .. } => true,
            // Config needs fixing by hand
            Self::Config { .. } | Self::NotFound { .. } => false,
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::Io(e) => AppError::config(format!("IO: {e}")),
            ConfigError::Json(e) => AppError::config(format!("JSON: {e}")),
            ConfigError::Home => AppError::config("Could not determine home directory"),
        }
    }
}

impl From<crate::assistant::ResponseError> for AppError {
    fn from(err: crate::assistant::ResponseError) -> Self {
        use crate::assistant::ResponseError;
        match err {
            ResponseError::Superseded { id, .. } => AppError::Superseded { id },
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::config("bad value");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Config\""));
        assert!(json.contains("\"message\":\"bad value\""));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(AppError::Superseded { id: 3 }.is_recoverable());
        assert!(AppError::io("broken pipe").is_recoverable());
        assert!(!AppError::config("bad").is_recoverable());
        assert!(!AppError::not_found("topic noise").is_recoverable());
    }

    #[test]
    fn test_from_response_error() {
        let err: AppError = crate::assistant::ResponseError::Superseded { id: 1, latest: 2 }.into();
        match err {
            AppError::Superseded { id } => assert_eq!(id, 1),
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = crate::config::ConfigError::Home.into();
        assert_eq!(err.to_string(), "Config error: Could not determine home directory");
    }
}
