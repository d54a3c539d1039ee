//! Player registry: up to two named players, numbered in creation order.

use super::board::BoardLayout;
use super::player::{Player, PlayerId, PLAYER_COUNT};
use crate::error::EngineError;

/// The players seated at one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player in the next free seat.
    ///
    /// Fails with [`EngineError::TooManyPlayers`] once both seats are taken;
    /// the registry is left unchanged.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        layout: BoardLayout,
    ) -> Result<Player, EngineError> {
        let id = match self.players.len() {
            0 => PlayerId::ONE,
            1 => PlayerId::TWO,
            _ => return Err(EngineError::TooManyPlayers),
        };

        let player = Player::new(name, id, layout.store_index(id));
        log::info!("seated {} as {}", player.name(), id);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Look up a seated player.
    pub fn get(&self, id: PlayerId) -> Result<&Player, EngineError> {
        self.players
            .get(id.index())
            .ok_or(EngineError::PlayerNotRegistered(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() == PLAYER_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
