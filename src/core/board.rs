//! Board geometry and seed counters.
//!
//! ## Layout
//!
//! With `n` pits per side the board is a ring of `2n + 2` counters:
//!
//! ```text
//!  index:   0 .. n-1     n       n+1 .. 2n     2n+1
//!          [P1 pits]  [P1 store]  [P2 pits]  [P2 store]
//! ```
//!
//! Sowing walks the ring in increasing index order, wrapping from the last
//! index back to 0. Pit `i` faces pit `2n - i` across the board.
//!
//! ## Conservation
//!
//! Every mutating operation here only moves seeds between counters; the
//! board total is fixed when the board is built. A board never holds more
//! than `u32::MAX` seeds, so no counter can overflow.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

use super::action::Capture;
use super::config::{GameConfig, MAX_PITS_PER_SIDE};
use super::player::{PlayerId, PlayerMap};
use crate::error::{ConfigError, EngineError};

/// Counters held inline before spilling to the heap (standard board).
const INLINE_CELLS: usize = 14;

/// Geometry of a board with a given number of pits per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardLayout {
    pits_per_side: usize,
}

impl BoardLayout {
    /// Six pits per side.
    pub const STANDARD: BoardLayout = BoardLayout { pits_per_side: 6 };

    /// Create a layout. Use [`GameConfig::validate`] to check the size first.
    #[must_use]
    pub const fn new(pits_per_side: usize) -> Self {
        Self { pits_per_side }
    }

    #[must_use]
    pub const fn pits_per_side(self) -> usize {
        self.pits_per_side
    }

    /// Total counters on the board, stores included.
    #[must_use]
    pub const fn len(self) -> usize {
        2 * self.pits_per_side + 2
    }

    /// Board index of a player's store.
    #[must_use]
    pub const fn store_index(self, player: PlayerId) -> usize {
        self.pits_per_side + player.index() * (self.pits_per_side + 1)
    }

    /// Board indices of a player's pits, in sowing order.
    #[must_use]
    pub const fn pit_range(self, player: PlayerId) -> Range<usize> {
        let start = player.index() * (self.pits_per_side + 1);
        start..start + self.pits_per_side
    }

    /// Translate a 1-based, player-relative pit number to a board index.
    ///
    /// Returns `None` if `pit` is outside `1..=pits_per_side`.
    #[must_use]
    pub fn pit_index(self, player: PlayerId, pit: usize) -> Option<usize> {
        (1..=self.pits_per_side)
            .contains(&pit)
            .then(|| self.pit_range(player).start + pit - 1)
    }

    #[must_use]
    pub const fn is_store(self, index: usize) -> bool {
        index == self.pits_per_side || index == 2 * self.pits_per_side + 1
    }

    /// The pit facing `index` across the board. Stores have no opposite.
    #[must_use]
    pub fn opposite(self, index: usize) -> Option<usize> {
        (index < self.len() && !self.is_store(index)).then(|| 2 * self.pits_per_side - index)
    }

    /// The player whose side (pits or store) holds `index`.
    #[must_use]
    pub const fn owner(self, index: usize) -> PlayerId {
        if index <= self.pits_per_side {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }

    /// The next index in sowing order.
    #[must_use]
    pub const fn next(self, index: usize) -> usize {
        (index + 1) % self.len()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Seed counters for every pit and store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    layout: BoardLayout,
    cells: SmallVec<[u32; INLINE_CELLS]>,
}

#[derive(Deserialize)]
struct RawBoard {
    layout: BoardLayout,
    cells: Vec<u32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = EngineError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.layout, &raw.cells)
    }
}

impl Board {
    /// The starting position for a configuration: every pit filled, stores empty.
    ///
    /// The configuration should already have passed [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let layout = config.layout();
        let cells = (0..layout.len())
            .map(|i| if layout.is_store(i) { 0 } else { config.seeds_per_pit })
            .collect();

        Self { layout, cells }
    }

    /// The standard 6-pit, 4-seed starting position.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&GameConfig::default())
    }

    /// Build a board from explicit counters (analysis positions, tests).
    pub fn from_cells(layout: BoardLayout, cells: &[u32]) -> Result<Self, EngineError> {
        let pits = layout.pits_per_side();
        if !(1..=MAX_PITS_PER_SIDE).contains(&pits) {
            return Err(ConfigError::PitsPerSide(pits).into());
        }
        if cells.len() != layout.len() {
            return Err(EngineError::BoardShape {
                expected: layout.len(),
                actual: cells.len(),
            });
        }
        let total: u64 = cells.iter().map(|&c| u64::from(c)).sum();
        if total > u64::from(u32::MAX) {
            return Err(EngineError::TooManySeeds(total));
        }

        Ok(Self {
            layout,
            cells: SmallVec::from_slice(cells),
        })
    }

    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// All counters in board order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// A player's pits, in board order.
    #[must_use]
    pub fn pits(&self, player: PlayerId) -> &[u32] {
        &self.cells[self.layout.pit_range(player)]
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.cells[self.layout.store_index(player)]
    }

    /// Seeds still in play on a player's side.
    #[must_use]
    pub fn side_total(&self, player: PlayerId) -> u32 {
        self.pits(player).iter().sum()
    }

    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().sum()
    }

    #[must_use]
    pub fn is_side_empty(&self, player: PlayerId) -> bool {
        self.side_total(player) == 0
    }

    /// True once either side has no seeds left in its pits.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        PlayerId::all().any(|p| self.is_side_empty(p))
    }

    /// Pick up every seed at `from` and sow them one per counter.
    ///
    /// The opponent's store is skipped; the mover's own store is sown into.
    /// Returns the index of the counter that received the last seed, or
    /// `from` itself when the pit was empty.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a board index.
    pub fn sow(&mut self, player: PlayerId, from: usize) -> usize {
        let skip = self.layout.store_index(player.opponent());
        let mut seeds = std::mem::take(&mut self.cells[from]);
        let mut index = from;

        while seeds > 0 {
            index = self.layout.next(index);
            if index == skip {
                index = self.layout.next(index);
            }
            self.cells[index] += 1;
            seeds -= 1;
        }

        index
    }

    /// Whether the last seed of a sowing triggers a capture.
    ///
    /// The landing pit must be on the mover's side and hold exactly the one
    /// seed just dropped there.
    #[must_use]
    pub fn qualifies_for_capture(&self, player: PlayerId, final_index: usize) -> bool {
        self.layout.pit_range(player).contains(&final_index) && self.cells[final_index] == 1
    }

    /// Move the seeds at pit `index` and its opposite pit into the player's store.
    ///
    /// Returns `None` without touching the board when `index` is a store or
    /// off the board, since neither has an opposite pit.
    pub fn capture(&mut self, player: PlayerId, index: usize) -> Option<Capture> {
        let opposite = self.layout.opposite(index)?;

        let seeds =
            std::mem::take(&mut self.cells[index]) + std::mem::take(&mut self.cells[opposite]);
        self.cells[self.layout.store_index(player)] += seeds;

        Some(Capture {
            pit: index,
            opposite,
            seeds,
        })
    }

    /// End-of-game sweep: each side's remaining seeds go to its own store.
    ///
    /// Returns the amount swept per player. Sweeping an already-swept board
    /// moves nothing.
    pub fn sweep(&mut self) -> PlayerMap<u32> {
        let swept = PlayerMap::new(|p| self.side_total(p));

        for player in PlayerId::all() {
            for index in self.layout.pit_range(player) {
                self.cells[index] = 0;
            }
            self.cells[self.layout.store_index(player)] += swept[player];
        }

        swept
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in PlayerId::all() {
            writeln!(f, "player{}:", player.number())?;
            writeln!(f, "store: {}", self.store(player))?;
            writeln!(f, "{:?}", self.pits(player))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u32; 14]) -> Board {
        Board::from_cells(BoardLayout::STANDARD, &cells).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let layout = BoardLayout::STANDARD;

        assert_eq!(layout.len(), 14);
        assert_eq!(layout.store_index(PlayerId::ONE), 6);
        assert_eq!(layout.store_index(PlayerId::TWO), 13);
        assert_eq!(layout.pit_range(PlayerId::ONE), 0..6);
        assert_eq!(layout.pit_range(PlayerId::TWO), 7..13);
    }

    #[test]
    fn test_pit_index_translation() {
        let layout = BoardLayout::STANDARD;

        assert_eq!(layout.pit_index(PlayerId::ONE, 1), Some(0));
        assert_eq!(layout.pit_index(PlayerId::ONE, 6), Some(5));
        assert_eq!(layout.pit_index(PlayerId::TWO, 1), Some(7));
        assert_eq!(layout.pit_index(PlayerId::TWO, 6), Some(12));
        assert_eq!(layout.pit_index(PlayerId::ONE, 0), None);
        assert_eq!(layout.pit_index(PlayerId::TWO, 7), None);
    }

    #[test]
    fn test_opposite_pits() {
        let layout = BoardLayout::STANDARD;

        for i in 0..6 {
            assert_eq!(layout.opposite(i), Some(12 - i));
            assert_eq!(layout.opposite(12 - i), Some(i));
        }
        assert_eq!(layout.opposite(6), None);
        assert_eq!(layout.opposite(13), None);
        assert_eq!(layout.opposite(14), None);
    }

    #[test]
    fn test_owner() {
        let layout = BoardLayout::STANDARD;

        assert_eq!(layout.owner(0), PlayerId::ONE);
        assert_eq!(layout.owner(6), PlayerId::ONE);
        assert_eq!(layout.owner(7), PlayerId::TWO);
        assert_eq!(layout.owner(13), PlayerId::TWO);
    }

    #[test]
    fn test_standard_board() {
        let board = Board::standard();

        assert_eq!(board.pits(PlayerId::ONE), &[4; 6]);
        assert_eq!(board.pits(PlayerId::TWO), &[4; 6]);
        assert_eq!(board.store(PlayerId::ONE), 0);
        assert_eq!(board.store(PlayerId::TWO), 0);
        assert_eq!(board.total_seeds(), 48);
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_from_cells_checks_shape() {
        let err = Board::from_cells(BoardLayout::STANDARD, &[0; 12]).unwrap_err();
        assert_eq!(err, EngineError::BoardShape { expected: 14, actual: 12 });
    }

    #[test]
    fn test_from_cells_caps_total_seeds() {
        let mut cells = [0; 14];
        cells[0] = u32::MAX;
        assert!(Board::from_cells(BoardLayout::STANDARD, &cells).is_ok());

        cells[7] = 1;
        let err = Board::from_cells(BoardLayout::STANDARD, &cells).unwrap_err();
        assert_eq!(err, EngineError::TooManySeeds(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn test_sow_lands_in_own_store() {
        let mut board = Board::standard();

        let last = board.sow(PlayerId::ONE, 2);

        assert_eq!(last, 6);
        assert_eq!(board.cells(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        let mut board = board([13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let last = board.sow(PlayerId::ONE, 0);

        assert_eq!(last, 0);
        assert_eq!(board.get(13), Some(0));
        assert_eq!(board.cells(), &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_sow_player_two_skips_player_one_store() {
        let mut board = board([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0]);

        let last = board.sow(PlayerId::TWO, 12);

        // 13, 0..5, skip 6, 7
        assert_eq!(last, 7);
        assert_eq!(board.get(6), Some(0));
        assert_eq!(board.get(13), Some(1));
        assert_eq!(board.total_seeds(), 8);
    }

    #[test]
    fn test_sow_empty_pit_is_noop() {
        let mut board = board([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        assert_eq!(board.sow(PlayerId::ONE, 0), 0);
        assert_eq!(board.total_seeds(), 1);
    }

    #[test]
    fn test_capture_rule() {
        let board = board([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        assert!(board.qualifies_for_capture(PlayerId::ONE, 1));
        assert!(!board.qualifies_for_capture(PlayerId::TWO, 1));
        assert!(!board.qualifies_for_capture(PlayerId::ONE, 0));
    }

    #[test]
    fn test_stores_never_qualify_for_capture() {
        let board = board([0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1]);

        assert!(!board.qualifies_for_capture(PlayerId::ONE, 6));
        assert!(!board.qualifies_for_capture(PlayerId::TWO, 13));
    }

    #[test]
    fn test_capture_moves_both_pits() {
        let mut board = board([0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 5, 0, 0, 0]);

        let capture = board.capture(PlayerId::ONE, 2).unwrap();

        assert_eq!(capture, Capture { pit: 2, opposite: 10, seeds: 6 });
        assert_eq!(board.get(2), Some(0));
        assert_eq!(board.get(10), Some(0));
        assert_eq!(board.store(PlayerId::ONE), 9);
    }

    #[test]
    fn test_capture_without_opposite_pit() {
        let mut board = Board::standard();

        assert_eq!(board.capture(PlayerId::ONE, 6), None);
        assert_eq!(board.capture(PlayerId::TWO, 13), None);
        assert_eq!(board.capture(PlayerId::ONE, 14), None);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_sweep() {
        let mut board = board([0, 0, 0, 0, 0, 0, 20, 1, 2, 0, 0, 3, 0, 22]);

        let swept = board.sweep();

        assert_eq!(swept[PlayerId::ONE], 0);
        assert_eq!(swept[PlayerId::TWO], 6);
        assert_eq!(board.store(PlayerId::ONE), 20);
        assert_eq!(board.store(PlayerId::TWO), 28);
        assert!(board.pits(PlayerId::ONE).iter().chain(board.pits(PlayerId::TWO)).all(|&s| s == 0));

        let again = board.sweep();
        assert_eq!(again, PlayerMap::with_value(0));
        assert_eq!(board.total_seeds(), 48);
    }

    #[test]
    fn test_game_over() {
        assert!(board([0, 0, 0, 0, 0, 0, 24, 4, 4, 4, 4, 4, 4, 0]).is_game_over());
        assert!(board([1, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 23]).is_game_over());
        assert!(!board([1, 0, 0, 0, 0, 0, 23, 1, 0, 0, 0, 0, 0, 23]).is_game_over());
    }

    #[test]
    fn test_small_layout() {
        let config = GameConfig::new().with_pits_per_side(3).with_seeds_per_pit(2);
        let mut board = Board::new(&config);

        assert_eq!(board.cells(), &[2, 2, 2, 0, 2, 2, 2, 0]);
        assert_eq!(board.layout().opposite(0), Some(6));

        let last = board.sow(PlayerId::TWO, 6);
        assert_eq!(last, 0);
        assert_eq!(board.cells(), &[3, 2, 2, 0, 2, 2, 0, 1]);
    }

    #[test]
    fn test_display() {
        let text = Board::standard().to_string();

        assert_eq!(
            text,
            "player1:\nstore: 0\n[4, 4, 4, 4, 4, 4]\nplayer2:\nstore: 0\n[4, 4, 4, 4, 4, 4]\n"
        );
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::standard();
        board.sow(PlayerId::TWO, 9);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_board_deserialization_checks_shape() {
        let json = r#"{"layout":{"pits_per_side":6},"cells":[1,2,3]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_board_deserialization_caps_total_seeds() {
        let json = r#"{"layout":{"pits_per_side":6},"cells":[4294967295,0,0,0,0,0,0,1,0,0,0,0,0,0]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
