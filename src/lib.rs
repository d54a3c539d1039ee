//! # kalah-engine
//!
//! Rules engine for two-player Mancala, Kalah variant.
//!
//! ## Design Principles
//!
//! 1. **Engine, not application**: No I/O loop, no turn sequencing, no
//!    rendering. Callers drive the engine and render its output.
//!
//! 2. **Errors are values**: Every rejected operation returns an
//!    [`EngineError`] and leaves the game untouched.
//!
//! 3. **Seeds only move**: Sowing, capture and the end-of-game sweep
//!    conserve the board total.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, board geometry, moves, state
//! - `rules`: `RulesEngine` trait separating rules from state
//! - `games`: The Kalah rule set and the `Mancala` engine facade
//! - `error`: Structured error types
//!
//! ## Logging
//!
//! Moves, captures and extra turns are logged at `debug`, player seating
//! and game end at `info`, through the `log` facade. Install any logger in
//! the host to see them.

pub mod core;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardLayout, Capture, GameConfig, GameState, Move, MoveOutcome, MoveRecord, Player,
    PlayerId, PlayerMap, PlayerRegistry,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::kalah::{KalahRules, Mancala, Winner};

pub use crate::error::{ConfigError, EngineError};
