use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniversityError {
    #[error("Source error: {0}")]
    Source(String),
}

pub type UniversityResult<T> = Result<T, UniversityError>;

impl IntoResponse for UniversityError {
    fn into_response(self) -> Response {
        let UniversityError::Source(detail) = &self;
        tracing::error!("University source failed: {}", detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to load universities" })),
        )
            .into_response()
    }
}
