//! Game configuration.
//!
//! The standard Kalah board has six pits per side and four seeds per pit.
//! Both are configurable; everything else (store positions, opposite pits,
//! sowing order) is derived from `pits_per_side` through [`BoardLayout`].

use serde::{Deserialize, Serialize};

use super::board::BoardLayout;
use crate::error::ConfigError;

/// Largest supported number of pits per side.
pub const MAX_PITS_PER_SIDE: usize = 32;

/// Largest supported number of seeds per pit. Keeps the board total of the
/// biggest board within `u32`.
pub const MAX_SEEDS_PER_PIT: u32 = u32::MAX / (2 * MAX_PITS_PER_SIDE as u32);

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playing pits on each side of the board.
    pub pits_per_side: usize,

    /// Seeds placed in every pit of the starting position.
    pub seeds_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits_per_side: 6,
            seeds_per_pit: 4,
        }
    }
}

impl GameConfig {
    /// The standard 6-pit, 4-seed game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PITS_PER_SIDE).contains(&self.pits_per_side) {
            return Err(ConfigError::PitsPerSide(self.pits_per_side));
        }
        if !(1..=MAX_SEEDS_PER_PIT).contains(&self.seeds_per_pit) {
            return Err(ConfigError::SeedsPerPit(self.seeds_per_pit));
        }
        Ok(())
    }

    /// Board geometry for this configuration.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.pits_per_side)
    }

    /// Seeds on the board for the whole game.
    ///
    /// Saturates at `u32::MAX` for configurations that fail [`validate`](Self::validate).
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        let total = (self.pits_per_side as u64)
            .saturating_mul(2)
            .saturating_mul(u64::from(self.seeds_per_pit));
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}
