//! AI-score formatting shared by result, history, and admin tables.

/// Scores strictly above this percentage render as "danger".
pub const DANGER_THRESHOLD: f64 = 70.0;

/// Round a `0..=1` fraction to a whole percentage in `0..=100`.
pub fn ai_percent(score: f64) -> u32 {
    whole_percent(score * 100.0)
}

/// Round an already-percentage value (admin endpoints) into `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_percent(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

pub fn human_percent(score: f64) -> u32 {
    100 - ai_percent(score)
}

/// Bar modifier class for a percentage.
pub fn bar_class(percent: f64) -> &'static str {
    if percent > DANGER_THRESHOLD { "score-bar--danger" } else { "score-bar--ok" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(ai_percent(0.42), 42);
        assert_eq!(ai_percent(0.736), 74);
        assert_eq!(human_percent(0.736), 26);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(ai_percent(1.7), 100);
        assert_eq!(ai_percent(-0.2), 0);
        assert_eq!(ai_percent(f64::NAN), 0);
        assert_eq!(whole_percent(83.6), 84);
        assert_eq!(whole_percent(250.0), 100);
    }

    #[test]
    fn danger_starts_above_seventy() {
        assert_eq!(bar_class(70.0), "score-bar--ok");
        assert_eq!(bar_class(70.5), "score-bar--danger");
    }
}
