use serde::{Deserialize, Serialize};

use crate::models::game::GameSummary;

/// Avatar shown when a player has not uploaded one.
pub const PLACEHOLDER_AVATAR_URL: &str = "https://www.chess.com/bundles/web/images/user-image.svg";

const FLAG_CDN_URL: &str = "https://flagcdn.com/w80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Rapid,
    Blitz,
    Bullet,
}

/// Last recorded rating per time control. Zero means no rating on record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    pub rapid: u32,
    pub blitz: u32,
    pub bullet: u32,
}

impl Ratings {
    pub fn new(rapid: u32, blitz: u32, bullet: u32) -> Self {
        Ratings {
            rapid,
            blitz,
            bullet,
        }
    }

    pub fn get(&self, category: RatingCategory) -> u32 {
        match category {
            RatingCategory::Rapid => self.rapid,
            RatingCategory::Blitz => self.blitz,
            RatingCategory::Bullet => self.bullet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub handle: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub country_code: Option<String>,
    pub ratings: Ratings,
    pub follower_count: u64,
    pub status: String,
    pub profile_url: String,
}

impl PlayerRecord {
    pub fn avatar_or_placeholder(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(PLACEHOLDER_AVATAR_URL)
    }

    pub fn flag_url(&self) -> Option<String> {
        self.country_code
            .as_ref()
            .map(|code| format!("{}/{}.png", FLAG_CDN_URL, code))
    }
}

/// Everything the player page renders: the profile card and the latest games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOverview {
    pub player: PlayerRecord,
    pub recent_games: Vec<GameSummary>,
}
