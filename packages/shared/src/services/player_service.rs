use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::chess_com::RawStats;
use crate::models::comparison::HeadToHead;
use crate::models::game::GameSummary;
use crate::models::player::{PlayerOverview, PlayerRecord};
use crate::models::year_month::YearMonth;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::player_repository::PlayerRepository;
use crate::services::comparison_service::ComparisonService;
use crate::services::errors::player_service_errors::{LookupFailure, PlayerServiceError};
use crate::services::normalizer::{normalize_game, normalize_profile};

/// Maximum number of games returned by `fetch_recent_games`.
pub const RECENT_GAMES_LIMIT: usize = 5;

pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        PlayerService { repository }
    }

    pub async fn fetch_player(&self, handle: &str) -> Result<PlayerRecord, PlayerServiceError> {
        let handle = validate_handle(handle)?;
        self.lookup(handle)
            .await
            .map_err(PlayerServiceError::PlayerNotFound)
    }

    /// Fetches both players concurrently. Fails unless both resolve.
    pub async fn fetch_comparison_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(PlayerRecord, PlayerRecord), PlayerServiceError> {
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Please enter both usernames".to_string(),
            ));
        }

        match tokio::join!(self.lookup(first), self.lookup(second)) {
            (Ok(first), Ok(second)) => Ok((first, second)),
            (first, second) => Err(PlayerServiceError::ComparisonFailed {
                first: first.err(),
                second: second.err(),
            }),
        }
    }

    pub async fn compare_players(
        &self,
        first: &str,
        second: &str,
    ) -> Result<HeadToHead, PlayerServiceError> {
        let (first, second) = self.fetch_comparison_pair(first, second).await?;
        Ok(ComparisonService::head_to_head(first, second))
    }

    /// Most recent games of `month`, newest first. Never fails: a missing
    /// archive or an unreachable upstream both yield an empty list.
    pub async fn fetch_recent_games(&self, handle: &str, month: YearMonth) -> Vec<GameSummary> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Vec::new();
        }

        match self.repository.get_monthly_games(handle, month).await {
            Ok(archive) => archive
                .games
                .iter()
                .rev()
                .take(RECENT_GAMES_LIMIT)
                .map(|game| normalize_game(game, handle))
                .collect(),
            Err(e) => {
                warn!("No games available for {} in {}: {}", handle, month, e);
                Vec::new()
            }
        }
    }

    /// Profile plus recent games, fetched concurrently.
    pub async fn fetch_overview(
        &self,
        handle: &str,
        month: YearMonth,
    ) -> Result<PlayerOverview, PlayerServiceError> {
        let handle = validate_handle(handle)?;
        // The archive read is issued alongside the profile lookup and its
        // result is discarded when the player turns out to be missing.
        let (player, recent_games) = tokio::join!(
            self.lookup(handle),
            self.fetch_recent_games(handle, month)
        );
        Ok(PlayerOverview {
            player: player.map_err(PlayerServiceError::PlayerNotFound)?,
            recent_games,
        })
    }

    async fn lookup(&self, handle: &str) -> Result<PlayerRecord, LookupFailure> {
        let profile = async {
            self.repository
                .get_profile(handle)
                .await
                .map_err(|e| LookupFailure::new(handle, &e))
        };
        let stats = async {
            match self.repository.get_stats(handle).await {
                Ok(stats) => Ok(stats),
                Err(PlayerRepositoryError::NotFound) => {
                    debug!("No stats for {}, using unrated defaults", handle);
                    Ok(RawStats::default())
                }
                Err(e) => Err(LookupFailure::new(handle, &e)),
            }
        };

        let (profile, stats) = tokio::try_join!(profile, stats).map_err(|failure| {
            info!("Lookup failed: {}", failure);
            failure
        })?;
        Ok(normalize_profile(profile, &stats))
    }
}

fn validate_handle(handle: &str) -> Result<&str, PlayerServiceError> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(PlayerServiceError::ValidationError(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(handle)
}
