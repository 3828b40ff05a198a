//! JSON shapes served to the front-end.

use serde::Serialize;
use shared::models::comparison::{ComparisonResult, HeadToHead};
use shared::models::game::GameSummary;
use shared::models::player::{PlayerOverview, PlayerRecord};

/// A player record with display values resolved: `avatar` always holds a
/// usable image URL and `flag_url` is present only with a country code.
#[derive(Debug, Serialize)]
pub struct PlayerCard {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub avatar: String,
    pub flag_url: Option<String>,
}

impl From<PlayerRecord> for PlayerCard {
    fn from(player: PlayerRecord) -> Self {
        PlayerCard {
            avatar: player.avatar_or_placeholder().to_string(),
            flag_url: player.flag_url(),
            player,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub player: PlayerCard,
    pub recent_games: Vec<GameSummary>,
}

impl From<PlayerOverview> for OverviewResponse {
    fn from(overview: PlayerOverview) -> Self {
        OverviewResponse {
            player: overview.player.into(),
            recent_games: overview.recent_games,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeadToHeadResponse {
    pub first: PlayerCard,
    pub second: PlayerCard,
    pub rapid: ComparisonResult,
    pub blitz: ComparisonResult,
    pub bullet: ComparisonResult,
}

impl From<HeadToHead> for HeadToHeadResponse {
    fn from(result: HeadToHead) -> Self {
        HeadToHeadResponse {
            first: result.first.into(),
            second: result.second.into(),
            rapid: result.rapid,
            blitz: result.blitz,
            bullet: result.bullet,
        }
    }
}
