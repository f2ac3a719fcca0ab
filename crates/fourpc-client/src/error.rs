//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response arrived.
    ///
    /// The request URL is stripped on conversion since it carries the token.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Server answered with an empty body, which the bot API uses to signal rejection.
    #[error("empty response from server")]
    EmptyResponse,

    /// The stream endpoint could not be opened.
    #[error("could not open stream: {reason}")]
    Connection {
        /// Why the connection failed.
        reason: String,
    },

    /// Reading from an open stream failed.
    #[error("stream read error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if the server rejected the request with an HTTP status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Check if the request never reached the server or the stream never opened.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Error::Connection { .. } => true,
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e.without_url())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let unauthorized = Error::Api {
            status: 401,
            body: String::new(),
        };
        assert!(unauthorized.is_api_error());
        assert!(unauthorized.is_auth_error());
        assert!(!unauthorized.is_server_error());

        let unavailable = Error::Api {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert!(unavailable.is_server_error());
        assert_eq!(unavailable.to_string(), "API error (503): maintenance");
    }

    #[test]
    fn test_connection_error() {
        let err = Error::Connection {
            reason: "refused".to_string(),
        };
        assert!(err.is_connection_error());
        assert_eq!(err.to_string(), "could not open stream: refused");
        assert!(!Error::EmptyResponse.is_connection_error());
    }
}
