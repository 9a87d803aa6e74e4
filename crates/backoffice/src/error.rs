//! CLI error types with miette diagnostics.
//!
//! Maps `backoffice_api::Error` and `ConfigError` into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use backoffice_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the dashboard service")]
    #[diagnostic(
        code(backoffice::connection_failed),
        help("Check that the base URL is correct and the service is running.")
    )]
    ConnectionFailed {
        #[source]
        source: backoffice_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(backoffice::timeout),
        help("Increase timeout with --timeout or check service responsiveness.")
    )]
    Timeout,

    // ── Service responses ────────────────────────────────────────────
    #[error("Request rejected (HTTP {status})")]
    #[diagnostic(
        code(backoffice::unauthorized),
        help("The service refused this request. Check the gateway credentials for this dashboard.")
    )]
    Unauthorized { status: u16 },

    #[error("Not found: {message}")]
    #[diagnostic(code(backoffice::not_found))]
    NotFound { message: String },

    #[error("Service error (HTTP {status}{}): {message}", .code.as_deref().map(|c| format!(", {c}")).unwrap_or_default())]
    #[diagnostic(code(backoffice::api_error))]
    ApiError {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response shape: {message}")]
    #[diagnostic(
        code(backoffice::contract),
        help("The service answered, but not with the expected fields. Re-run with -vv to see the request.")
    )]
    Contract { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(backoffice::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(backoffice::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Or pass --base-url to target a service directly."
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No dashboard profile configured")]
    #[diagnostic(
        code(backoffice::no_config),
        help(
            "Add a [profiles.<name>] table with dashboard and base_url to {path}\n\
             Or pass --base-url / set BACKOFFICE_BASE_URL."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(backoffice::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(backoffice::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(backoffice::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(backoffice::toml))]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Unauthorized { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── backoffice_api::Error → CliError ─────────────────────────────────

impl From<backoffice_api::Error> for CliError {
    fn from(err: backoffice_api::Error) -> Self {
        use backoffice_api::Error as ApiErr;

        if err.is_timeout() {
            return Self::Timeout;
        }

        match err {
            ApiErr::Status {
                status: status @ (401 | 403),
                ..
            } => Self::Unauthorized { status },
            ApiErr::Status {
                status: 404,
                message,
                ..
            } => Self::NotFound { message },
            ApiErr::Status {
                status,
                message,
                code,
            } => Self::ApiError {
                status,
                code,
                message,
            },
            ApiErr::Deserialization { message, .. } => Self::Contract { message },
            ApiErr::InvalidUrl(e) => Self::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            },
            ApiErr::InvalidBaseUrl { url, reason } => Self::Validation {
                field: "base_url".into(),
                reason: format!("'{url}': {reason}"),
            },
            ApiErr::Encode(e) => Self::Json(e),
            source @ ApiErr::Transport(_) => Self::ConnectionFailed { source },
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::ProfileNotFound { name, available } => {
                Self::ProfileNotFound { name, available }
            }
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Serialization(e) => Self::Toml(e),
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_map_to_exit_codes() {
        let not_found: CliError = backoffice_api::Error::Status {
            status: 404,
            message: "no such transaction".into(),
            code: None,
        }
        .into();
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let denied: CliError = backoffice_api::Error::Status {
            status: 401,
            message: String::new(),
            code: None,
        }
        .into();
        assert!(matches!(denied, CliError::Unauthorized { status: 401 }));
        assert_eq!(denied.exit_code(), exit_code::AUTH);

        let server: CliError = backoffice_api::Error::Status {
            status: 502,
            message: "bad gateway".into(),
            code: Some("UPSTREAM".into()),
        }
        .into();
        assert_eq!(server.exit_code(), exit_code::GENERAL);
        assert_eq!(
            server.to_string(),
            "Service error (HTTP 502, UPSTREAM): bad gateway"
        );
    }

    #[test]
    fn contract_mismatch_maps_to_contract() {
        let err: CliError = backoffice_api::Error::Deserialization {
            message: "missing field `url`".into(),
            body: "{}".into(),
        }
        .into();
        assert!(matches!(err, CliError::Contract { .. }));
    }

    #[test]
    fn config_validation_is_usage_error() {
        let err: CliError = ConfigError::Validation {
            field: "base_url".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
