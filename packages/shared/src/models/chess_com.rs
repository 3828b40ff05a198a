//! Response shapes of the Chess.com published-data API.
//!
//! Only the fields the normalizer reads are declared; everything that can be
//! missing upstream is an `Option` or carries a serde default.

use serde::{Deserialize, Serialize};

use crate::models::player::RatingCategory;

/// `GET /player/{handle}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawProfile {
    pub username: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    /// Country resource URL, e.g. `https://api.chess.com/pub/country/US`.
    pub country: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /player/{handle}/stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawStats {
    pub chess_rapid: Option<RawCategoryStats>,
    pub chess_blitz: Option<RawCategoryStats>,
    pub chess_bullet: Option<RawCategoryStats>,
}

impl RawStats {
    pub fn category(&self, category: RatingCategory) -> Option<&RawCategoryStats> {
        match category {
            RatingCategory::Rapid => self.chess_rapid.as_ref(),
            RatingCategory::Blitz => self.chess_blitz.as_ref(),
            RatingCategory::Bullet => self.chess_bullet.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawCategoryStats {
    pub last: Option<RawRatingSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawRatingSnapshot {
    pub rating: Option<i64>,
}

/// `GET /player/{handle}/games/{YYYY}/{MM}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawArchive {
    #[serde(default)]
    pub games: Vec<RawGame>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawGame {
    #[serde(default)]
    pub url: String,
    pub white: RawGameSide,
    pub black: RawGameSide,
    pub time_class: Option<String>,
    /// Seconds since the Unix epoch.
    pub end_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawGameSide {
    pub username: String,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_ignore_unrelated_categories() {
        let stats: RawStats = serde_json::from_value(json!({
            "chess_blitz": { "last": { "rating": 3200, "date": 1700000000, "rd": 30 } },
            "fide": 2800,
            "tactics": { "highest": { "rating": 3000 } }
        }))
        .unwrap();

        assert_eq!(stats.chess_rapid, None);
        assert_eq!(
            stats
                .category(RatingCategory::Blitz)
                .and_then(|c| c.last.as_ref())
                .and_then(|l| l.rating),
            Some(3200)
        );
    }

    #[test]
    fn test_profile_minimal_document() {
        let profile: RawProfile = serde_json::from_value(json!({ "username": "hikaru" })).unwrap();

        assert_eq!(profile.username, "hikaru");
        assert_eq!(profile.country, None);
        assert_eq!(profile.followers, 0);
    }

    #[test]
    fn test_archive_without_games_key() {
        let archive: RawArchive = serde_json::from_value(json!({})).unwrap();
        assert!(archive.games.is_empty());
    }
}
