//! Scoring module - fixed point table
//!
//! Scores never depend on a level: soft drops earn 1 point per row, hard drops
//! 2 points per row, and each lock adds a single line-clear bonus based on the
//! total rows it cleared.

use crate::types::{HARD_DROP_POINTS, LINE_SCORES, SOFT_DROP_POINTS};

/// Line clear bonus for one lock
/// lines: number of lines cleared by that lock (anything above 4 scores as 4)
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}
