use thiserror::Error;

/// Top-level error type for the `backoffice-api` crate.
///
/// Fetchers never construct these themselves: every variant originates in
/// the transport and is handed back to the caller untouched.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL or joined endpoint URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL parsed but cannot anchor an endpoint path.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Request payload could not be encoded as JSON.
    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    // ── Status ──────────────────────────────────────────────────────
    /// The server answered with a non-2xx status.
    #[error("Service error (HTTP {status}): {message}")]
    Status {
        status: u16,
        message: String,
        code: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// The body did not match the declared response contract.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Status { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the request never completed because of a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the server could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Extract the service error code, if the body carried one.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let err = Error::Status {
            status: 404,
            message: "Not Found".into(),
            code: None,
        };
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
        assert!(err.api_error_code().is_none());

        let err = Error::Status {
            status: 403,
            message: "Forbidden".into(),
            code: Some("FORBIDDEN".into()),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.api_error_code(), Some("FORBIDDEN"));
    }

    #[test]
    fn deserialization_is_not_transport() {
        let err = Error::Deserialization {
            message: "missing field `url`".into(),
            body: "{}".into(),
        };
        assert!(!err.is_timeout());
        assert!(!err.is_connect());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Deserialization error: missing field `url`");
    }
}
