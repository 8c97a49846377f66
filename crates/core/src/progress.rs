//! Enrollment progress bounds and request-value parsing.

use serde_json::Value;

use crate::error::CoreError;

/// Progress of a fresh enrollment.
pub const INITIAL_PROGRESS: i32 = 0;

/// Progress at which a roadmap counts as completed.
pub const COMPLETE_PROGRESS: i32 = 100;

const PROGRESS_MESSAGE: &str = "Progress must be a number between 0 and 100";

/// Parse a raw JSON `progress` value into a bounded percentage.
///
/// Accepts JSON numbers with an integral value in `0..=100` (so `50` and
/// `50.0` are both fine). Strings, booleans, `null`, fractions and
/// out-of-range numbers are rejected. Progress is not required to be
/// monotonic; callers may lower it.
pub fn parse_progress(value: &Value) -> Result<i32, CoreError> {
    let number = value
        .as_f64()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .ok_or_else(|| CoreError::Validation(PROGRESS_MESSAGE.into()))?;

    if !(f64::from(INITIAL_PROGRESS)..=f64::from(COMPLETE_PROGRESS)).contains(&number) {
        return Err(CoreError::Validation(PROGRESS_MESSAGE.into()));
    }

    Ok(number as i32)
}

/// Whether a progress value qualifies for a completion certificate.
pub fn is_complete(progress: i32) -> bool {
    progress >= COMPLETE_PROGRESS
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert_eq!(parse_progress(&json!(0)).unwrap(), 0);
        assert_eq!(parse_progress(&json!(100)).unwrap(), 100);
    }

    #[test]
    fn accepts_integral_float() {
        assert_eq!(parse_progress(&json!(42.0)).unwrap(), 42);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(parse_progress(&json!(-1)).is_err());
        assert!(parse_progress(&json!(101)).is_err());
        assert!(parse_progress(&json!(1e10)).is_err());
    }

    #[test]
    fn rejects_fractions() {
        assert!(parse_progress(&json!(33.3)).is_err());
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(parse_progress(&json!("50")).is_err());
        assert!(parse_progress(&json!(true)).is_err());
        assert!(parse_progress(&Value::Null).is_err());
        assert!(parse_progress(&json!([50])).is_err());
    }

    #[test]
    fn completion_threshold() {
        assert!(!is_complete(99));
        assert!(is_complete(100));
    }
}
