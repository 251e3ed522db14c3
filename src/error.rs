//! Error types for the animechat crate.
//!
//! This module defines the error type used across the configuration,
//! history, and client components. Per the program's error-handling
//! design, most errors are absorbed at the component boundary (reported
//! to the user or the log) rather than terminating the session.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the animechat crate.
#[derive(Clone, Debug)]
pub enum Error {
    /// The remote API returned a non-success envelope or HTTP status.
    Api {
        /// HTTP or envelope status code.
        status_code: u16,
        /// Human-readable error message.
        message: String,
    },

    /// Connection error reaching the remote API.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Error during JSON serialization or deserialization.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },

    /// Error during validation of configuration values.
    Validation {
        /// Human-readable error message.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Creates a new validation error.
    pub fn validation(message: impl Into<String>, field: Option<String>) -> Self {
        Error::Validation {
            message: message.into(),
            field,
        }
    }

    /// Returns true if this error came from the remote API.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// Returns true if this error is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api {
                status_code,
                message,
            } => {
                write!(f, "API error ({status_code}): {message}")
            }
            Error::Connection { message, .. } => write!(f, "Connection error: {message}"),
            Error::HttpClient { message, .. } => write!(f, "HTTP client error: {message}"),
            Error::Serialization { message, .. } => write!(f, "Serialization error: {message}"),
            Error::Io { message, .. } => write!(f, "I/O error: {message}"),
            Error::Url { message, .. } => write!(f, "URL error: {message}"),
            Error::Validation { message, field } => match field {
                Some(field) => write!(f, "Validation error for '{field}': {message}"),
                None => write!(f, "Validation error: {message}"),
            },
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => {
                source.as_ref().map(|e| e.as_ref() as &(dyn error::Error))
            }
            Error::HttpClient { source, .. } => {
                source.as_ref().map(|e| e.as_ref() as &(dyn error::Error))
            }
            Error::Serialization { source, .. } => {
                source.as_ref().map(|e| e.as_ref() as &(dyn error::Error))
            }
            Error::Io { source, .. } => Some(source.as_ref()),
            Error::Url { source, .. } => source.as_ref().map(|e| e as &(dyn error::Error)),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(err.to_string(), Some(err))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string(), Some(Box::new(err)))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = Error::api(500, "Internal error");
        assert_eq!(err.to_string(), "API error (500): Internal error");
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn connection_error_predicates() {
        let err = Error::connection("refused", None);
        assert!(err.is_connection());
        assert!(!err.is_api());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn io_error_from() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.is_io());
    }

    #[test]
    fn validation_error_with_field() {
        let err = Error::validation("must not be empty", Some("expressions".to_string()));
        assert!(err.to_string().contains("expressions"));
    }
}
