//! Scoring module - score, level and fall speed progression
//!
//! Level and fall interval are pure functions of the cleared-line count, so
//! the engine can recompute them at any time without extra state.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, LINES_PER_LEVEL, MIN_FALL_INTERVAL_MS,
    POINTS_PER_LINE, SCORE_MILESTONE,
};

/// Points for clearing `lines` rows at once
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE)
}

/// Level reached after `lines` cleared lines (starts at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Fall interval in milliseconds for `level`
///
/// Drops by 40ms per level from 500ms and never goes below 100ms.
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(reduction)
        .max(MIN_FALL_INTERVAL_MS)
}

/// Points left until the next 200-point milestone (HUD only)
pub fn points_to_next_milestone(score: u32) -> u32 {
    SCORE_MILESTONE - (score % SCORE_MILESTONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_fall_interval_table() {
        assert_eq!(fall_interval_ms(level_for_lines(0)), 500);
        assert_eq!(fall_interval_ms(level_for_lines(10)), 460);
        assert_eq!(fall_interval_ms(10), 140);
        assert_eq!(fall_interval_ms(11), 100);
        assert_eq!(fall_interval_ms(level_for_lines(100)), 100);
        assert_eq!(fall_interval_ms(50), 100);
        assert_eq!(fall_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_points_to_next_milestone() {
        assert_eq!(points_to_next_milestone(0), 200);
        assert_eq!(points_to_next_milestone(30), 170);
        assert_eq!(points_to_next_milestone(200), 200);
        assert_eq!(points_to_next_milestone(399), 1);
    }
}
