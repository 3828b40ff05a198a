//! Pure conversion of upstream records into view models.

use chrono::DateTime;

use crate::models::chess_com::{RawGame, RawProfile, RawStats};
use crate::models::game::{GameOutcome, GameSummary, Side};
use crate::models::player::{PlayerRecord, RatingCategory, Ratings};

pub fn normalize_profile(profile: RawProfile, stats: &RawStats) -> PlayerRecord {
    let country_code = profile.country.as_deref().and_then(country_code);
    PlayerRecord {
        handle: profile.username,
        name: profile.name.filter(|name| !name.trim().is_empty()),
        avatar_url: profile.avatar.filter(|avatar| !avatar.trim().is_empty()),
        country_code,
        ratings: Ratings {
            rapid: last_rating(stats, RatingCategory::Rapid),
            blitz: last_rating(stats, RatingCategory::Blitz),
            bullet: last_rating(stats, RatingCategory::Bullet),
        },
        follower_count: profile.followers,
        status: profile.status,
        profile_url: profile.url,
    }
}

pub fn normalize_game(game: &RawGame, queried_handle: &str) -> GameSummary {
    let played_as = if game
        .black
        .username
        .eq_ignore_ascii_case(queried_handle.trim())
    {
        Side::Black
    } else {
        Side::White
    };
    let (own, opponent) = match played_as {
        Side::White => (&game.white, &game.black),
        Side::Black => (&game.black, &game.white),
    };

    GameSummary {
        opponent_handle: opponent.username.clone(),
        opponent_rating: opponent.rating,
        outcome: GameOutcome::from_result_token(&own.result),
        game_url: game.url.clone(),
        played_as,
        time_class: game.time_class.clone(),
        ended_at: game
            .end_time
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
    }
}

/// Lower-cased last path segment of a country resource URL.
fn country_code(url: &str) -> Option<String> {
    let segment = url.trim().trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(segment.to_ascii_lowercase())
}

fn last_rating(stats: &RawStats, category: RatingCategory) -> u32 {
    stats
        .category(category)
        .and_then(|category| category.last.as_ref())
        .and_then(|last| last.rating)
        .map(|rating| rating.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0)
}
