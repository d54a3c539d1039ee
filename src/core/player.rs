//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two Kalah seats. Internally 0-based;
//! the public player *number* is 1-based (1 or 2), matching how players
//! are addressed at the table.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A registered, named player. Immutable once created.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::EngineError;

/// Number of seats at a Kalah table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Serializes as the 1-based player number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (sows from pits `0..n`, store at `n`).
    pub const ONE: PlayerId = PlayerId(0);

    /// The second player (sows from pits `n+1..2n+1`, store at `2n+1`).
    pub const TWO: PlayerId = PlayerId(1);

    /// Look up a player by 1-based number.
    ///
    /// ```
    /// use kalah_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(1), Some(PlayerId::ONE));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both players, in seating order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(EngineError::UnknownPlayer(number))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.number()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data with O(1) access.
///
/// ```
/// use kalah_engine::core::{PlayerId, PlayerMap};
///
/// let mut swept: PlayerMap<u32> = PlayerMap::with_default();
/// swept[PlayerId::TWO] += 5;
/// assert_eq!(swept[PlayerId::ONE], 0);
/// assert_eq!(swept[PlayerId::TWO], 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    id: PlayerId,
    store_index: usize,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, id: PlayerId, store_index: usize) -> Self {
        Self {
            name: name.into(),
            id,
            store_index,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The 1-based player number.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.id.number()
    }

    /// Board index of this player's store.
    #[must_use]
    pub fn store_index(&self) -> usize {
        self.store_index
    }
}
