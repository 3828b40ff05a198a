use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::services::errors::player_service_errors::PlayerServiceError;

#[derive(Debug)]
pub enum ApiError {
    PlayerService(PlayerServiceError),
    BadRequest(String),
}

impl From<PlayerServiceError> for ApiError {
    fn from(error: PlayerServiceError) -> Self {
        ApiError::PlayerService(error)
    }
}

impl ApiError {
    /// Status and user-facing message. Unreachable upstreams are reported as
    /// not found, same as handles that do not exist.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::PlayerService(PlayerServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::PlayerService(PlayerServiceError::PlayerNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Player not found".to_string())
            }
            ApiError::PlayerService(PlayerServiceError::ComparisonFailed { .. }) => (
                StatusCode::NOT_FOUND,
                "One or both players could not be found.".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
