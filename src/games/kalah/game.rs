//! The `Mancala` engine: one board, its history, and up to two players.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::rules::KalahRules;
use crate::core::{
    Board, GameConfig, GameState, Move, MoveOutcome, MoveRecord, Player, PlayerId, PlayerRegistry,
};
use crate::error::EngineError;
use crate::rules::{GameResult, RulesEngine};

/// Outcome of [`Mancala::return_winner`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// This player's store holds strictly more seeds.
    Player { player: PlayerId, name: String },
    /// Both stores hold the same number of seeds.
    Tie,
    /// Neither side has run out of seeds yet.
    NotEnded,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player { player, name } => {
                write!(f, "Winner is player {}: {}", player.number(), name)
            }
            Winner::Tie => write!(f, "It's a tie"),
            Winner::NotEnded => write!(f, "Game has not ended"),
        }
    }
}

/// A single game of Kalah.
///
/// Players are addressed by number (1 or 2) and pits by 1-based number on
/// the mover's own side. Turn order is the caller's business: the engine
/// reports extra turns in [`MoveOutcome::extra_turn`] but accepts a move
/// from either player at any time until the game ends.
///
/// ```
/// use kalah_engine::{Mancala, Winner};
///
/// let mut game = Mancala::new();
/// game.create_player("Ada").unwrap();
/// game.create_player("Grace").unwrap();
///
/// let outcome = game.play_move(1, 3).unwrap();
/// assert!(outcome.extra_turn);
/// assert_eq!(game.get_player_store(1).unwrap(), 1);
/// assert_eq!(game.return_winner().unwrap(), Winner::NotEnded);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Mancala {
    rules: KalahRules,
    state: GameState,
    players: PlayerRegistry,
}

impl Mancala {
    /// A standard game: six pits per side, four seeds per pit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A game with a custom board size or seed count.
    pub fn with_config(config: GameConfig) -> Result<Self, EngineError> {
        Ok(Self {
            rules: KalahRules::new(config)?,
            state: GameState::new(&config),
            players: PlayerRegistry::new(),
        })
    }

    /// A game continuing from an arbitrary position.
    pub fn from_board(board: Board) -> Result<Self, EngineError> {
        let config = GameConfig::default().with_pits_per_side(board.layout().pits_per_side());
        Ok(Self {
            rules: KalahRules::new(config)?,
            state: GameState::from_board(board),
            players: PlayerRegistry::new(),
        })
    }

    #[must_use]
    pub fn rules(&self) -> &KalahRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    // === Player Registry ===

    /// Seat the next player (1, then 2).
    pub fn create_player(&mut self, name: impl Into<String>) -> Result<Player, EngineError> {
        self.players.create(name, self.state.board.layout())
    }

    /// Look up a seated player by number.
    pub fn player(&self, number: u8) -> Result<&Player, EngineError> {
        self.players.get(PlayerId::try_from(number)?)
    }

    pub fn get_player_name(&self, number: u8) -> Result<&str, EngineError> {
        Ok(self.player(number)?.name())
    }

    pub fn get_player_store_index(&self, number: u8) -> Result<usize, EngineError> {
        Ok(self.player(number)?.store_index())
    }

    /// Seeds in a seated player's store.
    pub fn get_player_store(&self, number: u8) -> Result<u32, EngineError> {
        let player = self.player(number)?;
        Ok(self.state.board.store(player.id()))
    }

    // === Board Queries ===

    /// A player's pits in board order. Does not require the player to be seated.
    pub fn get_player_pits(&self, number: u8) -> Result<&[u32], EngineError> {
        Ok(self.state.board.pits(PlayerId::try_from(number)?))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.board.is_game_over()
    }

    /// Pits the player may sow from right now.
    pub fn legal_moves(&self, number: u8) -> Result<Vec<Move>, EngineError> {
        Ok(self.rules.legal_moves(&self.state, PlayerId::try_from(number)?))
    }

    // === Moves ===

    /// Sow from pit `pit` (1-based, on the player's own side).
    ///
    /// Captures, the end-of-game sweep and the extra-turn signal are all
    /// resolved here and reported in the returned [`MoveOutcome`]. On error
    /// the board is unchanged.
    pub fn play_move(&mut self, number: u8, pit: usize) -> Result<MoveOutcome, EngineError> {
        let mv = Move::new(PlayerId::try_from(number)?, pit);
        self.rules.apply_move(&mut self.state, mv).inspect_err(|err| {
            log::debug!("rejected move {:?}: {}", mv, err);
        })
    }

    // === Results ===

    /// Final result, or `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Who won, by store count. The winner must have been seated.
    pub fn return_winner(&self) -> Result<Winner, EngineError> {
        Ok(match self.result() {
            None => Winner::NotEnded,
            Some(GameResult::Draw) => Winner::Tie,
            Some(GameResult::Winner(id)) => Winner::Player {
                player: id,
                name: self.players.get(id)?.name().to_string(),
            },
        })
    }
}

impl std::fmt::Display for Mancala {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.state.board, f)
    }
}
