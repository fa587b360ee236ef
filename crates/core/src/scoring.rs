//! Scoring module - line-clear points, level progression and fall speed
//!
//! Points for a clear are the classic table scaled by the current level
//! (not `level + 1`). Levels advance one step at a time, and only when the
//! cleared row count has gone past `(level + 1) * 10`.

use crate::types::{
    BASE_FALL_MS, FALL_INTERVAL_MIN_MS, FAST_DROP_MS, LINE_SCORES, ROWS_PER_LEVEL,
};

/// Points for clearing `rows` rows at once at `level`.
/// Four or more rows all score as a tetris.
pub fn calculate_line_score(rows: u32, level: u32) -> u32 {
    let idx = rows.min(4) as usize;
    LINE_SCORES[idx].saturating_mul(level)
}

/// Whether the level should step up, given the rows cleared so far.
pub fn should_level_up(rows: u32, level: u32) -> bool {
    rows > (level + 1) * ROWS_PER_LEVEL
}

/// Level after one progression check. Advances by at most one.
pub fn next_level(rows: u32, level: u32) -> u32 {
    if should_level_up(rows, level) {
        level + 1
    } else {
        level
    }
}

/// Normal fall interval for a level, in milliseconds.
///
/// `max(100, 1000 / (level * 0.8))`, with level 0 treated as 1.
/// Fractional results are truncated. Computed as `1000 * 5 / (level * 4)`
/// so the truncation is exact.
pub fn fall_interval_ms(level: u32) -> u32 {
    let ms = if level == 0 {
        BASE_FALL_MS
    } else {
        BASE_FALL_MS.saturating_mul(5) / level.saturating_mul(4)
    };
    ms.max(FALL_INTERVAL_MIN_MS)
}

/// Interval until the next tick, honouring the fast-drop override.
pub fn tick_interval_ms(level: u32, fast_drop: bool) -> u32 {
    if fast_drop {
        FAST_DROP_MS
    } else {
        fall_interval_ms(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_line_score(4, 2), 2400);
        assert_eq!(calculate_line_score(1, 5), 200);
        assert_eq!(calculate_line_score(0, 9), 0);
    }

    #[test]
    fn test_more_than_four_rows_scores_as_tetris() {
        assert_eq!(calculate_line_score(5, 1), 1200);
    }

    #[test]
    fn test_level_up_threshold() {
        assert!(!should_level_up(20, 1));
        assert!(should_level_up(21, 1));
        assert!(!should_level_up(30, 2));
        assert!(should_level_up(31, 2));
    }

    #[test]
    fn test_next_level_steps_once() {
        assert_eq!(next_level(100, 1), 2);
        assert_eq!(next_level(5, 1), 1);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_ms(0), 1000);
        assert_eq!(fall_interval_ms(1), 1250);
        assert_eq!(fall_interval_ms(2), 625);
        assert_eq!(fall_interval_ms(3), 416);
        assert_eq!(fall_interval_ms(12), 104);
        assert_eq!(fall_interval_ms(13), 100);
        assert_eq!(fall_interval_ms(50), 100);
    }

    #[test]
    fn test_tick_interval_fast_drop() {
        assert_eq!(tick_interval_ms(1, true), 15);
        assert_eq!(tick_interval_ms(30, true), 15);
        assert_eq!(tick_interval_ms(2, false), 625);
    }
}
