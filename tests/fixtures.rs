use serde_json::{json, Value};
use shared::models::chess_com::{
    RawArchive, RawCategoryStats, RawGame, RawGameSide, RawProfile, RawRatingSnapshot, RawStats,
};

pub fn profile_json(username: &str, country: &str) -> Value {
    json!({
        "player_id": 15448422,
        "@id": format!("https://api.chess.com/pub/player/{}", username.to_lowercase()),
        "url": format!("https://www.chess.com/member/{}", username),
        "username": username,
        "name": "Test Player",
        "avatar": format!("https://images.chesscomfiles.com/{}.png", username.to_lowercase()),
        "followers": 1234,
        "country": format!("https://api.chess.com/pub/country/{}", country),
        "status": "premium",
        "is_streamer": false
    })
}

pub fn stats_json(rapid: u32, blitz: u32, bullet: u32) -> Value {
    json!({
        "chess_rapid": { "last": { "rating": rapid, "date": 1700000000, "rd": 45 } },
        "chess_blitz": { "last": { "rating": blitz, "date": 1700000000, "rd": 30 } },
        "chess_bullet": { "last": { "rating": bullet, "date": 1700000000, "rd": 50 } },
        "fide": 2800,
        "tactics": { "highest": { "rating": 3000, "date": 1600000000 } }
    })
}

/// `count` games, oldest first, with `handle` alternating colours.
pub fn archive_json(handle: &str, count: usize) -> Value {
    let games: Vec<Value> = (0..count)
        .map(|i| {
            // even games: handle plays white and wins; odd games: handle
            // plays black and loses on time
            let (white, black, white_result, black_result) = if i % 2 == 0 {
                (handle.to_string(), format!("opponent{}", i), "win", "checkmated")
            } else {
                (format!("opponent{}", i), handle.to_lowercase(), "win", "timeout")
            };
            json!({
                "url": format!("https://www.chess.com/game/live/{}", i),
                "time_class": "blitz",
                "end_time": 1714521600 + i as i64,
                "rated": true,
                "white": { "username": white, "rating": 3000 + i, "result": white_result },
                "black": { "username": black, "rating": 3100 + i, "result": black_result }
            })
        })
        .collect();
    json!({ "games": games })
}

pub fn raw_profile(username: &str) -> RawProfile {
    RawProfile {
        username: username.to_string(),
        name: None,
        avatar: None,
        country: Some("https://api.chess.com/pub/country/US".to_string()),
        followers: 100,
        status: "basic".to_string(),
        url: format!("https://www.chess.com/member/{}", username),
    }
}

pub fn raw_stats(rapid: i64, blitz: i64, bullet: i64) -> RawStats {
    let category = |rating: i64| {
        Some(RawCategoryStats {
            last: Some(RawRatingSnapshot {
                rating: Some(rating),
            }),
        })
    };
    RawStats {
        chess_rapid: category(rapid),
        chess_blitz: category(blitz),
        chess_bullet: category(bullet),
    }
}

pub fn raw_archive(handle: &str, count: usize) -> RawArchive {
    RawArchive {
        games: (0..count)
            .map(|i| RawGame {
                url: format!("https://www.chess.com/game/live/{}", i),
                white: RawGameSide {
                    username: handle.to_string(),
                    rating: 3000,
                    result: "win".to_string(),
                },
                black: RawGameSide {
                    username: format!("opponent{}", i),
                    rating: 2900,
                    result: "resigned".to_string(),
                },
                time_class: Some("bullet".to_string()),
                end_time: Some(1714521600 + i as i64),
            })
            .collect(),
    }
}
