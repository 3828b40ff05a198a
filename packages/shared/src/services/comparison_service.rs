use std::cmp::Ordering;

use crate::models::comparison::{ComparisonResult, HeadToHead};
use crate::models::player::{PlayerRecord, RatingCategory};

pub struct ComparisonService;

impl ComparisonService {
    /// Orders two players by their last rating in one category.
    pub fn compare(
        first: &PlayerRecord,
        second: &PlayerRecord,
        category: RatingCategory,
    ) -> ComparisonResult {
        match first
            .ratings
            .get(category)
            .cmp(&second.ratings.get(category))
        {
            Ordering::Greater => ComparisonResult::FirstHigher,
            Ordering::Less => ComparisonResult::SecondHigher,
            Ordering::Equal => ComparisonResult::Equal,
        }
    }

    pub fn head_to_head(first: PlayerRecord, second: PlayerRecord) -> HeadToHead {
        let rapid = Self::compare(&first, &second, RatingCategory::Rapid);
        let blitz = Self::compare(&first, &second, RatingCategory::Blitz);
        let bullet = Self::compare(&first, &second, RatingCategory::Bullet);
        HeadToHead {
            first,
            second,
            rapid,
            blitz,
            bullet,
        }
    }
}
