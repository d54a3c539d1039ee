//! Game state: the board plus the history of moves that produced it.
//!
//! History uses `im` persistent vectors so cloning a state (to explore a
//! line of play, or to hand a snapshot to a renderer) is O(1).

use im::Vector;

use super::action::MoveRecord;
use super::board::Board;
use super::config::GameConfig;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Seed counters.
    pub board: Board,

    history: Vector<MoveRecord>,

    /// Seeds on the board when the game began. Constant for the game.
    initial_seeds: u32,
}

impl GameState {
    /// Starting position for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    /// Start from an arbitrary position with an empty history.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let initial_seeds = board.total_seeds();
        Self {
            board,
            history: Vector::new(),
            initial_seeds,
        }
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn initial_seeds(&self) -> u32 {
        self.initial_seeds
    }

    /// Sequence number the next recorded move will get.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    /// Append a move to history.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
