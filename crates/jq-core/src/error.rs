//! Core error types for the Jira query builder.
//!
//! Query assembly itself never fails; these errors cover the collaborators
//! around it (configuration, the Jira REST API, response decoding).

use thiserror::Error;

/// Core error type for all query builder operations
#[derive(Error, Debug)]
pub enum JqError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Jira rejected the credentials: {message}")]
    Unauthorized { message: String },

    #[error("Jira API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response from Jira: {0}")]
    Decode(String),
}

impl JqError {
    pub fn config(msg: impl Into<String>) -> Self {
        JqError::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        JqError::Transport(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        JqError::Unauthorized {
            message: msg.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        JqError::Decode(msg.into())
    }

    /// HTTP status code this error maps to when surfaced through the API
    pub fn status_code(&self) -> u16 {
        match self {
            JqError::Config(_) => 500,
            JqError::Transport(_) => 502,
            JqError::Unauthorized { .. } => 401,
            JqError::Api { .. } => 502,
            JqError::Decode(_) => 502,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            JqError::Config(_) => "configuration_error",
            JqError::Transport(_) => "transport_error",
            JqError::Unauthorized { .. } => "unauthorized",
            JqError::Api { .. } => "jira_api_error",
            JqError::Decode(_) => "malformed_response",
        }
    }
}

/// Standard Result type for query builder operations
pub type JqResult<T> = Result<T, JqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(JqError::unauthorized("bad token").status_code(), 401);
        assert_eq!(JqError::transport("timed out").status_code(), 502);
        assert_eq!(
            JqError::Api {
                status: 400,
                message: "bad jql".into()
            }
            .status_code(),
            502
        );
        assert_eq!(JqError::config("missing base url").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(JqError::decode("truncated body").error_code(), "malformed_response");
        assert_eq!(JqError::unauthorized("expired").error_code(), "unauthorized");
    }

    #[test]
    fn test_display_includes_context() {
        let err = JqError::Api {
            status: 410,
            message: "endpoint removed".into(),
        };
        assert_eq!(err.to_string(), "Jira API error: 410 - endpoint removed");
    }
}
