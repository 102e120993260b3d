//! Scoring module - flat points per cleared row
//!
//! Every cleared row is worth [`LINE_CLEAR_POINTS`] regardless of how many rows
//! clear together. There are no levels, combos or drop bonuses.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows in one lock.
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}
