//! Rules engine trait.
//!
//! Rules are kept apart from the state they act on:
//! - What moves are legal
//! - How a move changes the board
//! - When the game is over, and who won

use crate::core::action::{Move, MoveOutcome};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::EngineError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Strictly more seeds in this player's store.
    Winner(PlayerId),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the player can't move (game over)
/// - `apply_move`: Must be deterministic, and must leave `state` untouched
///   when it returns an error
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal moves for a player in this state.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Apply a move to the state.
    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<MoveOutcome, EngineError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `mv` is among the legal moves for its player.
    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        self.legal_moves(state, mv.player).contains(&mv)
    }

    /// Whether the player has any legal move.
    fn has_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        !self.legal_moves(state, player).is_empty()
    }
}
