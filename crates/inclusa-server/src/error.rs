use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inclusa_core::error::{CoreError, ValidationFailure, WizardError};
use inclusa_dashboard::DashboardError;
use inclusa_render::RenderError;
use serde::Serialize;

use crate::forms::FormError;
use crate::sink::SinkError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// A transition the session's current step does not allow.
    Conflict(String),
    Validation(ValidationFailure),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Validation(failure) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                failure.to_string(),
                Some(failure.message_key()),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, code })).into_response()
    }
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Validation(failure) => ApiError::Validation(failure),
            WizardError::Catalog(e) => ApiError::Internal(e.to_string()),
            misuse @ (WizardError::StepMismatch { .. }
            | WizardError::NoPreviousStep(_)
            | WizardError::NotAtCompletion(_)
            | WizardError::AlreadyComplete
            | WizardError::SessionMovedOn) => ApiError::Conflict(misuse.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownLanguage(code) => {
                ApiError::NotFound(format!("unknown language: {code}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::UnknownFormat(_) | DashboardError::UnsupportedFormat(_) => {
                ApiError::BadRequest(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<SinkError> for ApiError {
    fn from(e: SinkError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        ApiError::Validation(e.into())
    }
}
