//! Core engine types: players, configuration, board, moves, state.
//!
//! These are the building blocks the rules operate on. None of them know
//! about turn order or winners; that lives in `rules` and `games`.

pub mod player;
pub mod registry;
pub mod config;
pub mod board;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use registry::PlayerRegistry;
pub use config::{GameConfig, MAX_PITS_PER_SIDE, MAX_SEEDS_PER_PIT};
pub use board::{Board, BoardLayout};
pub use action::{Capture, Move, MoveOutcome, MoveRecord};
pub use state::GameState;
