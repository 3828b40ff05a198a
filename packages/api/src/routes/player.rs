use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState, views::OverviewResponse};
use shared::models::game::GameSummary;
use shared::models::year_month::YearMonth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/player/{handle}", get(get_player))
        .route("/player/{handle}/games", get(get_recent_games))
}

#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    /// `YYYY-MM`; the current month when omitted.
    pub month: Option<String>,
}

async fn get_player(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let overview = state
        .player_service
        .fetch_overview(&handle, YearMonth::current())
        .await
        .map_err(|e| {
            error!("Failed to retrieve player {}: {}", handle, e);
            ApiError::from(e)
        })?;
    debug!(
        "Player {} retrieved with {} recent games",
        overview.player.handle,
        overview.recent_games.len()
    );
    Ok(Json(OverviewResponse::from(overview)))
}

async fn get_recent_games(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let month = match query.month {
        Some(month) => month
            .parse::<YearMonth>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => YearMonth::current(),
    };
    let games = state
        .player_service
        .fetch_recent_games(&handle, month)
        .await;
    Ok(Json(games))
}
