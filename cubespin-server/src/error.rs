//! HTTP mapping of core errors
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cubespin_core::CubeError;
use serde_json::json;

/// Error returned by request handlers, rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError(CubeError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CubeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CubeError> for ApiError {
    fn from(err: CubeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.to_string() }));
        (self.status(), body).into_response()
    }
}
