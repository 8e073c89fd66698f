//! HTTP error responses.
//!
//! Every failure leaves the API as `{"message": "..."}` with a matching status
//! code. Failures that expose their cause add an `error` field.

use salvo::{
    Response, Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use storefront_app::domain::validation::ValidationError;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human readable description of the failure
    pub message: String,

    /// Underlying cause, when the endpoint reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
    error: Option<String>,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: None,
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// A 500 whose cause has already been logged.
    pub(crate) fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR_MESSAGE,
        )
    }

    /// Log `source` and answer with a generic 500.
    pub(crate) fn internal_logged(context: &str, source: &dyn std::error::Error) -> Self {
        error!("{context}: {source}");

        Self::internal()
    }

    /// Log `source` and answer with a 500 that carries its text as `error`.
    pub(crate) fn internal_with_cause(context: &str, source: &dyn std::error::Error) -> Self {
        error!("{context}: {source}");

        Self {
            error: Some(source.to_string()),
            ..Self::internal()
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(MessageResponse {
            message: self.message,
            error: self.error,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", MessageResponse::to_schema(components)),
            );
        }
    }
}
