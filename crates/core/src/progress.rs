//! Enrollment progress and review-rating arithmetic.
//!
//! Kept here so the repository layer and tests share one definition of
//! each derived number.

/// Progress percentage for `completed` of `total` lessons, rounded to two
/// decimal places.
///
/// Returns `None` when the course has no lessons; callers must leave the
/// stored percentage untouched in that case rather than divide by zero.
pub fn completion_percentage(completed: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        return None;
    }
    Some(round2(100.0 * completed as f64 / total as f64))
}

/// Mean rating over a set of review ratings, rounded to two decimal
/// places. `None` when the set is empty.
pub fn average_rating(ratings: &[i16]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    Some(round2(sum as f64 / ratings.len() as f64))
}

/// Whether a manually supplied progress percentage is acceptable.
pub fn is_valid_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_complete() {
        assert_eq!(completion_percentage(2, 4), Some(50.0));
    }

    #[test]
    fn test_thirds_round_to_two_decimals() {
        assert_eq!(completion_percentage(1, 3), Some(33.33));
        assert_eq!(completion_percentage(2, 3), Some(66.67));
    }

    #[test]
    fn test_zero_lessons_is_none() {
        assert_eq!(completion_percentage(0, 0), None);
        assert_eq!(completion_percentage(3, 0), None);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[5, 4, 5, 4]), Some(4.5));
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(is_valid_percentage(0.0));
        assert!(is_valid_percentage(100.0));
        assert!(!is_valid_percentage(100.01));
        assert!(!is_valid_percentage(-0.5));
        assert!(!is_valid_percentage(f64::NAN));
    }
}
