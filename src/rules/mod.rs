//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state
//! - Win/draw conditions
//!
//! State types never call into the rules; callers (and the `Mancala`
//! facade) drive a `RulesEngine` against a `GameState`.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
