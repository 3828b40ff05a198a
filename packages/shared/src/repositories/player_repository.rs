use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ChessComConfig;
use crate::models::chess_com::{RawArchive, RawProfile, RawStats};
use crate::models::year_month::YearMonth;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the upstream player-data service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn get_profile(&self, handle: &str) -> Result<RawProfile, PlayerRepositoryError>;
    async fn get_stats(&self, handle: &str) -> Result<RawStats, PlayerRepositoryError>;
    async fn get_monthly_games(
        &self,
        handle: &str,
        month: YearMonth,
    ) -> Result<RawArchive, PlayerRepositoryError>;
}

pub struct ChessComPlayerRepository {
    pub client: Client,
    pub base_url: Url,
}

impl ChessComPlayerRepository {
    pub fn new(config: &ChessComConfig) -> Result<Self, PlayerRepositoryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PlayerRepositoryError::Transport(format!("Invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(PlayerRepositoryError::Transport(format!(
                "Invalid base URL: {}",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PlayerRepositoryError::Transport(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, PlayerRepositoryError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            debug!("{} returned {}", url, status);
            return Err(PlayerRepositoryError::NotFound);
        }
        if !status.is_success() {
            return Err(PlayerRepositoryError::Http(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PlayerRepository for ChessComPlayerRepository {
    async fn get_profile(&self, handle: &str) -> Result<RawProfile, PlayerRepositoryError> {
        self.get_json(self.endpoint(&["player", handle])).await
    }

    async fn get_stats(&self, handle: &str) -> Result<RawStats, PlayerRepositoryError> {
        self.get_json(self.endpoint(&["player", handle, "stats"]))
            .await
    }

    async fn get_monthly_games(
        &self,
        handle: &str,
        month: YearMonth,
    ) -> Result<RawArchive, PlayerRepositoryError> {
        let year = format!("{:04}", month.year());
        let month = format!("{:02}", month.month());
        self.get_json(self.endpoint(&["player", handle, "games", year.as_str(), month.as_str()]))
            .await
    }
}
