use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Submission contained no votes")]
    EmptySubmission,

    #[error("Coordinate out of range: ({x}, {y})")]
    CoordinateOutOfRange { x: f64, y: f64 },

    #[error("Unknown item id: {0}")]
    UnknownItem(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Persistence failures stay opaque to the caller; the detail
        // only goes to the server log.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {self}");
            "internal error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
