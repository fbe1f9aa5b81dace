use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Already registered for event {0}")]
    AlreadyRegistered(Uuid),

    #[error("Event {0} is full")]
    Full(Uuid),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Persist failed: {0}")]
    Persist(String),
}

pub type EventResult<T> = Result<T, EventError>;

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            EventError::NotFound(_) => (StatusCode::NOT_FOUND, "Event not found".to_string()),
            EventError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            EventError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            EventError::AlreadyRegistered(_) => (
                StatusCode::CONFLICT,
                "Already registered for this event".to_string(),
            ),
            EventError::Full(_) => (StatusCode::CONFLICT, "Event is full".to_string()),
            // Store failures surface as one generic message with the
            // detail kept in the logs; partial results are never returned.
            EventError::Fetch(detail) => {
                tracing::error!("Event fetch failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch events".to_string(),
                )
            }
            EventError::Persist(detail) => {
                tracing::error!("Event persist failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save event".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
