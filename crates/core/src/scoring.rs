//! Scoring module - line clear points and gravity speed
//!
//! One fixed ruleset: points depend only on how many rows a single lock
//! cleared, and gravity speeds up linearly with score down to a floor.

use std::time::Duration;

use crate::config::GameConfig;

/// Points for clearing `rows` rows with one lock.
///
/// A single tetromino spans at most four rows, so counts past the end of
/// the table cannot come from play; they score nothing.
pub fn line_score(config: &GameConfig, rows: usize) -> u32 {
    config.line_scores.get(rows).copied().unwrap_or(0)
}

/// Gravity interval in milliseconds for the current score.
///
/// `max(min_fall, base_fall - min(max_speedup, score * speedup_per_point))`
pub fn fall_interval_ms(config: &GameConfig, score: u32) -> u32 {
    let speedup = score
        .saturating_mul(config.speedup_ms_per_point)
        .min(config.max_speedup_ms);
    config
        .base_fall_ms
        .saturating_sub(speedup)
        .max(config.min_fall_ms)
}

/// Gravity interval for the current score.
pub fn fall_interval(config: &GameConfig, score: u32) -> Duration {
    Duration::from_millis(fall_interval_ms(config, score) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        let config = GameConfig::default();
        assert_eq!(line_score(&config, 0), 0);
        assert_eq!(line_score(&config, 1), 100);
        assert_eq!(line_score(&config, 2), 300);
        assert_eq!(line_score(&config, 3), 500);
        assert_eq!(line_score(&config, 4), 800);
        assert_eq!(line_score(&config, 5), 0);
    }

    #[test]
    fn test_fall_interval_shrinks_with_score() {
        let config = GameConfig::default();
        assert_eq!(fall_interval_ms(&config, 0), 500);
        assert_eq!(fall_interval_ms(&config, 100), 300);
        assert_eq!(fall_interval_ms(&config, 199), 102);
        assert_eq!(fall_interval_ms(&config, 200), 100);
        assert_eq!(fall_interval_ms(&config, 10_000), 100);
        assert_eq!(fall_interval_ms(&config, u32::MAX), 100);
    }

    #[test]
    fn test_fall_interval_respects_floor() {
        let config = GameConfig {
            min_fall_ms: 250,
            ..GameConfig::default()
        };
        assert_eq!(fall_interval(&config, 200), Duration::from_millis(250));
        assert_eq!(fall_interval(&config, 0), Duration::from_millis(500));
    }
}
