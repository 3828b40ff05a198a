use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

/// Result of a game from the point of view of the queried player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    LossByCheckmate,
    LossByTimeout,
    LossByResignation,
    LossByAbandonment,
    Draw,
    OtherLoss,
}

impl GameOutcome {
    /// Maps an upstream result token to an outcome.
    ///
    /// Unknown tokens map to `OtherLoss` so that a new upstream token can never
    /// be shown as a win or a draw.
    pub fn from_result_token(token: &str) -> Self {
        match token {
            "win" => GameOutcome::Win,
            "checkmated" => GameOutcome::LossByCheckmate,
            "timeout" => GameOutcome::LossByTimeout,
            "resigned" => GameOutcome::LossByResignation,
            "abandoned" => GameOutcome::LossByAbandonment,
            "agreed" | "repetition" | "stalemate" | "insufficient" | "50move"
            | "timevsinsufficient" => GameOutcome::Draw,
            _ => GameOutcome::OtherLoss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub opponent_handle: String,
    pub opponent_rating: u32,
    pub outcome: GameOutcome,
    pub game_url: String,
    pub played_as: Side,
    pub time_class: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("win", GameOutcome::Win)]
    #[test_case("checkmated", GameOutcome::LossByCheckmate)]
    #[test_case("timeout", GameOutcome::LossByTimeout)]
    #[test_case("resigned", GameOutcome::LossByResignation)]
    #[test_case("abandoned", GameOutcome::LossByAbandonment)]
    #[test_case("agreed", GameOutcome::Draw)]
    #[test_case("repetition", GameOutcome::Draw)]
    #[test_case("stalemate", GameOutcome::Draw)]
    #[test_case("insufficient", GameOutcome::Draw)]
    #[test_case("50move", GameOutcome::Draw)]
    #[test_case("timevsinsufficient", GameOutcome::Draw)]
    #[test_case("lose", GameOutcome::OtherLoss)]
    #[test_case("kingofthehill", GameOutcome::OtherLoss)]
    #[test_case("", GameOutcome::OtherLoss)]
    fn test_result_token_mapping(token: &str, expected: GameOutcome) {
        assert_eq!(GameOutcome::from_result_token(token), expected);
    }
}
