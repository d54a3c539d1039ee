//! Kalah, the common Western Mancala variant.
//!
//! Rules as implemented:
//! - Sowing is counter-clockwise (increasing board index), one seed per
//!   counter, skipping the opponent's store
//! - Last seed in your own store: you move again
//! - Last seed in an empty pit on your side: capture it together with the
//!   seeds in the opposite pit
//! - When either side runs out of seeds, each player banks what is left on
//!   their own side and the larger store wins

mod rules;
mod game;

pub use game::{Mancala, Winner};
pub use rules::KalahRules;
