// src/domain/review/aggregate.rs
//! Instructor rating recomputation.
//!
//! The rating is rebuilt from the complete review collection every time,
//! never adjusted incrementally. Midpoints round half-up (away from zero):
//! `0.125` becomes `0.13`.

use crate::domain::review::entity::Review;
use crate::domain::review::value_objects::{Rating, ReviewValue};
use rust_decimal::{Decimal, RoundingStrategy};

/// Mean of `values`, rounded to two decimal places; `0.00` when empty.
pub fn mean_rating<I>(values: I) -> Rating
where
    I: IntoIterator<Item = ReviewValue>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), value| {
            (sum + u64::from(value.get()), count + 1)
        });

    if count == 0 {
        return Rating::zero();
    }

    let mean = Decimal::from(sum) / Decimal::from(count);
    Rating::from_rounded(
        mean.round_dp_with_strategy(Rating::SCALE, RoundingStrategy::MidpointAwayFromZero),
    )
}

/// Rating over every review currently attached to the instructor's courses.
pub fn recompute_rating(reviews: &[Review]) -> Rating {
    mean_rating(reviews.iter().map(|review| review.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[i32]) -> Vec<ReviewValue> {
        raw.iter().map(|v| ReviewValue::new(*v).unwrap()).collect()
    }

    #[test]
    fn empty_collection_is_zero() {
        let rating = recompute_rating(&[]);
        assert_eq!(rating.value(), Decimal::ZERO);
        assert_eq!(rating.to_string(), "0.00");
    }

    #[test]
    fn whole_mean_keeps_two_decimals() {
        let rating = mean_rating(values(&[5, 3, 4]));
        assert_eq!(rating.value(), Decimal::new(400, 2));
        assert_eq!(rating.to_string(), "4.00");
    }

    #[test]
    fn fractional_mean() {
        let rating = mean_rating(values(&[5, 4, 3, 2]));
        assert_eq!(rating.to_string(), "3.50");
    }

    #[test]
    fn repeating_mean_is_rounded() {
        assert_eq!(mean_rating(values(&[5, 5, 4])).to_string(), "4.67");
        assert_eq!(mean_rating(values(&[1, 0, 0])).to_string(), "0.33");
    }

    #[test]
    fn midpoint_rounds_up() {
        // 1/8 = 0.125, 3/8 = 0.375
        assert_eq!(mean_rating(values(&[1, 0, 0, 0, 0, 0, 0, 0])).to_string(), "0.13");
        assert_eq!(mean_rating(values(&[3, 0, 0, 0, 0, 0, 0, 0])).to_string(), "0.38");
    }

    #[test]
    fn order_does_not_matter() {
        let forward = mean_rating(values(&[1, 2, 5, 5]));
        let backward = mean_rating(values(&[5, 5, 2, 1]));
        assert_eq!(forward, backward);
    }
}
