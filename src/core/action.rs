//! Moves and their results.
//!
//! A Kalah move is a player plus one of that player's pits, addressed by a
//! 1-based pit number relative to the player's own side. Applying a move
//! yields a [`MoveOutcome`]; the engine keeps a compact [`MoveRecord`] of
//! each one in its history.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{PlayerId, PlayerMap};

/// A move: sow the seeds of one of the player's own pits.
///
/// ```
/// use kalah_engine::core::{Move, PlayerId};
///
/// let mv = Move::new(PlayerId::TWO, 3);
/// assert_eq!(mv.player.number(), 2);
/// assert_eq!(mv.pit, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player sowing.
    pub player: PlayerId,

    /// 1-based pit number on the player's side.
    pub pit: usize,
}

impl Move {
    #[must_use]
    pub const fn new(player: PlayerId, pit: usize) -> Self {
        Self { player, pit }
    }
}

/// Seeds taken by a last-seed capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Board index where the last seed landed.
    pub pit: usize,

    /// Board index of the pit across from it.
    pub opposite: usize,

    /// Seeds moved into the mover's store (landing seed included).
    pub seeds: u32,
}

/// Everything a caller needs to know after a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mv: Move,

    /// Board index that received the last seed.
    pub final_index: usize,

    /// Set when the last seed landed in an empty pit on the mover's side.
    pub capture: Option<Capture>,

    /// Set when the last seed landed in the mover's own store.
    pub extra_turn: bool,

    /// Set when this move emptied a side and ended the game.
    pub game_over: bool,

    /// Seeds moved into each store by the end-of-game sweep.
    pub swept: Option<PlayerMap<u32>>,

    /// Board after the move (and sweep, if any).
    pub board: Board,
}

impl MoveOutcome {
    /// Who moves next: the mover again on an extra turn, otherwise the opponent.
    ///
    /// Advisory only; the engine does not enforce turn order.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        if self.extra_turn {
            self.mv.player
        } else {
            self.mv.player.opponent()
        }
    }

    /// Compact history entry for this outcome.
    #[must_use]
    pub fn record(&self, sequence: u32) -> MoveRecord {
        MoveRecord {
            sequence,
            mv: self.mv,
            final_index: self.final_index,
            captured: self.capture.map_or(0, |c| c.seeds),
            extra_turn: self.extra_turn,
            game_over: self.game_over,
        }
    }
}

/// A recorded move, for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the game (0-based).
    pub sequence: u32,

    pub mv: Move,

    pub final_index: usize,

    /// Seeds captured, 0 if no capture happened.
    pub captured: u32,

    pub extra_turn: bool,

    pub game_over: bool,
}
