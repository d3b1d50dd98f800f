//! Iteration count policy.
//!
//! ```text
//!   N ≤ 4                  → 1
//!   N ≤ 16                 → ⌊(π/4)·√N⌋
//!   N > 16, auto-tune on   → ⌊(π/4)·√N · 0.9⌋
//!   auto-tune off          → ⌊(π/4)·√N⌋ for every N
//! ```
//!
//! The large-N branch under-rotates on purpose. The boundaries are `≤`, not
//! `<`.

use std::f64::consts::FRAC_PI_4;

/// Scale applied to the textbook count for large auto-tuned spaces.
pub const AUTO_TUNE_SCALE: f64 = 0.9;

/// `⌊(π/4)·√N⌋`.
pub fn textbook_iterations(size: usize) -> usize {
    (FRAC_PI_4 * (size as f64).sqrt()).floor() as usize
}

/// Number of oracle + diffusion rounds for an index space of `size` states.
pub fn schedule(size: usize, auto_tune: bool) -> usize {
    if !auto_tune {
        return textbook_iterations(size);
    }
    if size <= 4 {
        1
    } else if size <= 16 {
        textbook_iterations(size)
    } else {
        (FRAC_PI_4 * (size as f64).sqrt() * AUTO_TUNE_SCALE).floor() as usize
    }
}
