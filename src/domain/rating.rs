//! Cosmetic doctor ratings.
//!
//! Ratings have no backing data. They are generated at random whenever the
//! directory is replaced, are never persisted, and change on every reload.
//! Only their structure is meaningful: one entry per doctor, with values
//! inside the fixed ranges below.

use super::doctor::Doctor;
use rand::Rng;
use std::collections::HashMap;
use std::ops::{Range, RangeInclusive};

/// Range of generated rating values.
pub const RATING_RANGE: RangeInclusive<f64> = 3.5..=5.0;

/// Range of generated review counts (upper bound exclusive).
pub const REVIEW_COUNT_RANGE: Range<u32> = 50..200;

/// A display rating for one doctor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Star value rounded to one decimal place.
    pub value: f64,
    pub review_count: u32,
}

impl Rating {
    /// Draws a random rating from `rng`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let raw = rng.gen_range(*RATING_RANGE.start()..*RATING_RANGE.end());
        Self {
            value: (raw * 10.0).round() / 10.0,
            review_count: rng.gen_range(REVIEW_COUNT_RANGE),
        }
    }
}

/// Ratings keyed by doctor id.
pub type RatingMap = HashMap<String, Rating>;

/// Generates a fresh rating for every doctor in `doctors`.
///
/// The returned map's key set is exactly the set of doctor ids.
pub fn generate_ratings<R: Rng>(doctors: &[Doctor], rng: &mut R) -> RatingMap {
    doctors
        .iter()
        .map(|doc| (doc.id.clone(), Rating::random(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let rating = Rating::random(&mut rng);
            assert!(RATING_RANGE.contains(&rating.value), "value {}", rating.value);
            assert!(REVIEW_COUNT_RANGE.contains(&rating.review_count));
        }
    }

    #[test]
    fn values_have_one_decimal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let rating = Rating::random(&mut rng);
            let scaled = rating.value * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn one_rating_per_doctor() {
        let doctors = vec![
            Doctor::new("a", "Dr. A", "Dermatologist"),
            Doctor::new("b", "Dr. B", "Neurologist"),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let ratings = generate_ratings(&doctors, &mut rng);

        assert_eq!(ratings.len(), 2);
        assert!(ratings.contains_key("a"));
        assert!(ratings.contains_key("b"));
    }
}
