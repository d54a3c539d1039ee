//! Kalah rules: sowing, last-seed capture, extra turns, end-of-game sweep.

use crate::core::{GameConfig, GameState, Move, MoveOutcome, PlayerId};
use crate::error::EngineError;
use crate::rules::{GameResult, RulesEngine};

/// The Kalah rule set for a given board configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KalahRules {
    config: GameConfig,
}

impl KalahRules {
    /// Rules for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for KalahRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        if state.board.is_game_over() {
            return vec![];
        }

        state
            .board
            .pits(player)
            .iter()
            .enumerate()
            .filter(|(_, seeds)| **seeds > 0)
            .map(|(i, _)| Move::new(player, i + 1))
            .collect()
    }

    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<MoveOutcome, EngineError> {
        let layout = state.board.layout();
        let player = mv.player;

        let from = layout
            .pit_index(player, mv.pit)
            .ok_or(EngineError::InvalidPit {
                pit: mv.pit,
                max: layout.pits_per_side(),
            })?;

        if state.board.is_game_over() {
            return Err(EngineError::GameEnded);
        }

        let board = &mut state.board;
        let seeds = board.cells()[from];
        let final_index = board.sow(player, from);
        log::debug!(
            "{} sowed {} seeds from pit {}, last seed at index {}",
            player,
            seeds,
            mv.pit,
            final_index
        );

        let capture = if board.qualifies_for_capture(player, final_index) {
            board.capture(player, final_index)
        } else {
            None
        };
        if let Some(capture) = &capture {
            log::debug!(
                "{} captured {} seeds via index {}",
                player,
                capture.seeds,
                capture.opposite
            );
        }

        let game_over = board.is_game_over();
        let swept = game_over.then(|| board.sweep());
        if game_over {
            log::info!(
                "game over: stores {} - {}",
                board.store(PlayerId::ONE),
                board.store(PlayerId::TWO)
            );
        }

        let extra_turn = final_index == layout.store_index(player);
        if extra_turn {
            log::debug!("{} takes another turn", player);
        }

        let outcome = MoveOutcome {
            mv,
            final_index,
            capture,
            extra_turn,
            game_over,
            swept,
            board: board.clone(),
        };
        state.record_move(outcome.record(state.next_sequence()));

        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.board.is_game_over() {
            return None;
        }

        let one = state.board.store(PlayerId::ONE);
        let two = state.board.store(PlayerId::TWO);

        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
