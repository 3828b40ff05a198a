use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::{error::ApiError, state::AppState, views::HeadToHeadResponse};

pub fn routes() -> Router<AppState> {
    Router::new().route("/compare", get(compare_players))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub second: String,
}

async fn compare_players(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<HeadToHeadResponse>, ApiError> {
    state
        .player_service
        .compare_players(&query.first, &query.second)
        .await
        .map(|result| Json(HeadToHeadResponse::from(result)))
        .map_err(|e| {
            error!(
                "Failed to compare {} with {}: {}",
                query.first, query.second, e
            );
            ApiError::from(e)
        })
}
