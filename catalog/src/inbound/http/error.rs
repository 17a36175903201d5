//! HTTP error payloads and mapping from port errors.
//!
//! The domain stays free of transport concerns; this module owns the single
//! status policy (`NotFound` maps to 404, malformed request syntax to 400,
//! every other failure to 500) and the uniform `{"message"}` envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::CatalogRepositoryError;

/// Error envelope returned by every endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    #[schema(example = "item not found")]
    pub message: String,
}

/// Transport-facing error carrying the status the handler decided on.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Failure in the backend or an invalid argument that reached it.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// The requested item does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// The request itself is malformed (body or parameter syntax).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Human-readable message placed in the envelope.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CatalogRepositoryError> for ApiError {
    fn from(err: CatalogRepositoryError) -> Self {
        match err {
            CatalogRepositoryError::NotFound => Self::not_found(err.to_string()),
            CatalogRepositoryError::InvalidArgument { .. }
            | CatalogRepositoryError::Connection { .. }
            | CatalogRepositoryError::Query { .. } => {
                error!(error = %err, "catalog operation failed");
                Self::internal(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorResponse {
            message: self.message.clone(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON extractor configuration rejecting malformed bodies with 400 and the
/// standard envelope instead of actix's default payload error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| decode_error(&err.to_string(), req))
}

/// Query extractor configuration keeping parameter errors in the envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| decode_error(&err.to_string(), req))
}

/// Path extractor configuration keeping identifier errors in the envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| decode_error(&err.to_string(), req))
}

fn decode_error(message: &str, req: &HttpRequest) -> actix_web::Error {
    error!(path = %req.path(), message, "request decoding failed");
    ApiError::bad_request(format!("error while decoding request: {message}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_maps_to_404() {
        let err = ApiError::from(CatalogRepositoryError::not_found());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "item not found");
    }

    #[rstest]
    #[case(CatalogRepositoryError::invalid_argument(
        "page and pageSize parameters should be greater than or equal to 1"
    ))]
    #[case(CatalogRepositoryError::connection("refused"))]
    #[case(CatalogRepositoryError::query("syntax error"))]
    fn every_other_failure_maps_to_500(#[case] source: CatalogRepositoryError) {
        let expected = source.to_string();
        let err = ApiError::from(source);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // The backend message is surfaced verbatim in the envelope.
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn envelope_serializes_message_only() {
        let body = serde_json::to_value(ErrorResponse {
            message: "boom".into(),
        })
        .expect("serializable envelope");
        assert_eq!(body, serde_json::json!({ "message": "boom" }));
    }
}
