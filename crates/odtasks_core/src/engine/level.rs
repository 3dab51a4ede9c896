//! Leveling engine.
//!
//! # Invariants
//! - `level_for` is monotonic non-decreasing in xp.
//! - Results are bounded by `[MIN_LEVEL, MAX_LEVEL]`.
//! - xp beyond the last threshold clamps at `MAX_LEVEL`.

/// Minimum xp required for each level; index `i` gates level `i + 1`.
pub const LEVEL_THRESHOLDS: [u64; 10] = [
    0, 500, 1_500, 3_000, 5_000, 7_500, 10_000, 13_500, 17_500, 22_000,
];

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Returns the level reached with `xp` experience points.
pub fn level_for(xp: u64) -> u32 {
    let reached = LEVEL_THRESHOLDS
        .iter()
        .take_while(|threshold| xp >= **threshold)
        .count() as u32;
    reached.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Position of an xp total inside its level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    /// Threshold that unlocked `level`.
    pub floor_xp: u64,
    /// Threshold of the next level, `None` at `MAX_LEVEL`.
    pub next_xp: Option<u64>,
}

impl LevelProgress {
    /// Integer percentage through the current band; 100 at max level.
    pub fn percent(&self, xp: u64) -> u8 {
        match self.next_xp {
            None => 100,
            Some(next) => {
                let span = next - self.floor_xp;
                let done = xp.saturating_sub(self.floor_xp).min(span);
                ((done * 100) / span) as u8
            }
        }
    }
}

pub fn level_progress(xp: u64) -> LevelProgress {
    let level = level_for(xp);
    let index = (level - 1) as usize;
    LevelProgress {
        level,
        floor_xp: LEVEL_THRESHOLDS[index],
        next_xp: LEVEL_THRESHOLDS.get(index + 1).copied(),
    }
}
