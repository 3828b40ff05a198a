use serde::{Deserialize, Serialize};

use crate::models::player::PlayerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonResult {
    FirstHigher,
    SecondHigher,
    Equal,
}

impl ComparisonResult {
    /// The result seen with the two players swapped.
    pub fn inverse(&self) -> ComparisonResult {
        match self {
            ComparisonResult::FirstHigher => ComparisonResult::SecondHigher,
            ComparisonResult::SecondHigher => ComparisonResult::FirstHigher,
            ComparisonResult::Equal => ComparisonResult::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub first: PlayerRecord,
    pub second: PlayerRecord,
    pub rapid: ComparisonResult,
    pub blitz: ComparisonResult,
    pub bullet: ComparisonResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for result in [
            ComparisonResult::FirstHigher,
            ComparisonResult::SecondHigher,
            ComparisonResult::Equal,
        ] {
            assert_eq!(result.inverse().inverse(), result);
        }
        assert_eq!(ComparisonResult::Equal.inverse(), ComparisonResult::Equal);
    }
}
