//! Shell configuration, read once from the environment at start-up.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | OS entropy | u64 seed for the piece source |
//! | `BLOCKFALL_FPS` | 60 | Frame rate, clamped to 1..=240 |
//! | `BLOCKFALL_LOG_PATH` | unset | JSON-lines event log path |
//!
//! Unparsable values fall back to the default.

use std::time::Duration;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

/// How long the game-over screen stays up before returning to the menu.
pub const GAME_OVER_HOLD: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed: Option<u64>,
    pub fps: u32,
    pub log_path: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: DEFAULT_FPS,
            log_path: None,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let fps = lookup("BLOCKFALL_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_FPS)
            .clamp(1, MAX_FPS);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            fps,
            log_path,
        }
    }

    /// Target duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ShellConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.frame_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "12345"),
            ("BLOCKFALL_FPS", " 30 "),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.jsonl"),
        ]));
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.fps, 30);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "abc"),
            ("BLOCKFALL_FPS", "fast"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_fps_is_clamped() {
        let zero = ShellConfig::from_lookup(lookup(&[("BLOCKFALL_FPS", "0")]));
        assert_eq!(zero.fps, 1);
        let huge = ShellConfig::from_lookup(lookup(&[("BLOCKFALL_FPS", "10000")]));
        assert_eq!(huge.fps, MAX_FPS);
    }
}
