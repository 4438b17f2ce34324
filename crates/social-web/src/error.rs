//! Mapping of service errors onto HTTP responses.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use social_core::SocialError;

/// Body sent for store failures; the cause only goes to the log.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Error returned by every handler; rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError(SocialError);

impl From<SocialError> for ApiError {
    fn from(err: SocialError) -> Self {
        Self(err)
    }
}

/// Unreadable bodies (wrong content type, bad JSON, wrong field types) are
/// validation failures like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(SocialError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            SocialError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            SocialError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            err @ SocialError::Graph(_) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// `axum::Json` whose rejection is an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

