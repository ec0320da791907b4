//! Game configuration - the fixed ruleset as an explicit value
//!
//! A [`GameConfig`] is handed to every [`Session`](crate::Session) at
//! construction and never changes afterwards, so independent sessions never
//! share mutable state. [`GameConfig::default`] is the reference ruleset.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `spawn` | (5, 0) | Anchor every new piece starts at |
//! | `base_fall_ms` | 500 | Gravity interval at score 0 |
//! | `speedup_ms_per_point` | 2 | Interval shrink per score point |
//! | `max_speedup_ms` | 400 | Cap on the total shrink |
//! | `min_fall_ms` | 100 | Absolute floor of the interval |
//! | `line_scores` | 0/100/300/500/800 | Points for 0-4 rows cleared at once |

use crate::types::Coord;

/// Line clear scoring table indexed by rows cleared in one lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Spawn anchor for new pieces.
pub const SPAWN_ANCHOR: Coord = Coord::new(5, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub spawn: Coord,
    pub base_fall_ms: u32,
    pub speedup_ms_per_point: u32,
    pub max_speedup_ms: u32,
    pub min_fall_ms: u32,
    pub line_scores: [u32; 5],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn: SPAWN_ANCHOR,
            base_fall_ms: 500,
            speedup_ms_per_point: 2,
            max_speedup_ms: 400,
            min_fall_ms: 100,
            line_scores: LINE_SCORES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_ruleset() {
        let config = GameConfig::default();
        assert_eq!(config.spawn, Coord::new(5, 0));
        assert_eq!(config.base_fall_ms, 500);
        assert_eq!(config.min_fall_ms, 100);
        assert_eq!(config.line_scores, [0, 100, 300, 500, 800]);
    }
}
