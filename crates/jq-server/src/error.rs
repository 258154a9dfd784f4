//! API error handling
//!
//! Maps core errors onto HTTP responses with a structured JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jq_core::JqError;
use serde::Serialize;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// No Jira connection is configured
    NotConfigured,
    /// A collaborator call failed
    Upstream(JqError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotConfigured => "jira_not_configured",
            ApiError::Upstream(err) => err.error_code(),
        }
    }
}

impl From<JqError> for ApiError {
    fn from(err: JqError) -> Self {
        ApiError::Upstream(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: match &self {
                ApiError::NotConfigured => {
                    "Jira connection is not configured; set JIRA_BASE_URL, JIRA_EMAIL and JIRA_API_TOKEN".to_string()
                }
                ApiError::Upstream(err) => err.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
