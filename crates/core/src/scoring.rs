//! Scoring module - points awarded per lock.
//!
//! A lock that clears `n` lines at once scores `n² × LINE_CLEAR_BASE`, so
//! simultaneous clears are worth more than the same lines cleared one by one.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows in a single lock.
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE)
}
