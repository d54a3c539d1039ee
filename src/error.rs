//! Structured error types.
//!
//! Every error is recoverable: an operation that fails leaves the engine
//! exactly as it was before the call.

use crate::core::config::MAX_SEEDS_PER_PIT;
use crate::core::player::PlayerId;

/// Errors raised by the rules engine and its player registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("too many players: a game holds at most 2")]
    TooManyPlayers,

    #[error("invalid pit number {pit}: expected 1..={max}")]
    InvalidPit { pit: usize, max: usize },

    #[error("game has ended")]
    GameEnded,

    #[error("unknown player number {0}: expected 1 or 2")]
    UnknownPlayer(u8),

    #[error("{0} has not been registered")]
    PlayerNotRegistered(PlayerId),

    #[error("board has {actual} cells, expected {expected}")]
    BoardShape { expected: usize, actual: usize },

    #[error("board holds {0} seeds, more than the {max} a board can count", max = u32::MAX)]
    TooManySeeds(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pits_per_side must be in 1..=32, got {0}")]
    PitsPerSide(usize),

    #[error("seeds_per_pit must be in 1..={max}, got {0}", max = MAX_SEEDS_PER_PIT)]
    SeedsPerPit(u32),
}
