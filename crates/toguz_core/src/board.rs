//! Core board types for Toguz Kumalak.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of pits on the board (9 per side).
pub const PIT_COUNT: usize = 18;

/// Number of pits owned by each side.
pub const PITS_PER_SIDE: usize = 9;

/// Seeds placed in every pit at the canonical start.
pub const DEFAULT_SEEDS: u32 = 9;

/// One of the two players, identified by the board row it owns.
///
/// An enum rather than a bool so serialized states stay unambiguous.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Side {
    /// Owns pits 0-8 (bottom row); moves first.
    Bottom,
    /// Owns pits 9-17 (top row).
    Top,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
        }
    }

    /// Store index for this side in [`BoardState::stores`].
    pub fn store_index(self) -> usize {
        match self {
            Side::Bottom => 0,
            Side::Top => 1,
        }
    }
}

/// Identifier of a move: the pit the mover scoops from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MoveId(usize);

impl MoveId {
    /// Wraps a pit index, rejecting anything off the board.
    pub fn new(pit: usize) -> Option<Self> {
        (pit < PIT_COUNT).then_some(Self(pit))
    }

    /// The 0-based pit index.
    pub fn pit(self) -> usize {
        self.0
    }

    /// The 1-based pit number used in notation.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Immutable snapshot of the board between moves.
///
/// Pits 0-8 are the bottom row left-to-right; pits 9-17 are the top row
/// right-to-left, so the indices trace one continuous sowing loop around
/// the board. There are no mutators: a rules engine produces a fresh
/// `BoardState` for every transition, and old snapshots stay valid for
/// as long as the move history references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pits: [u32; PIT_COUNT],
    stores: [u32; 2],
    to_move: Side,
}

impl BoardState {
    /// Canonical starting position: nine seeds in every pit, empty
    /// kazans, `Bottom` to move.
    pub fn new() -> Self {
        Self::with_seeds(DEFAULT_SEEDS)
    }

    /// Uniform starting position with `seeds` in every pit.
    pub fn with_seeds(seeds: u32) -> Self {
        Self {
            pits: [seeds; PIT_COUNT],
            stores: [0, 0],
            to_move: Side::Bottom,
        }
    }

    /// Assembles a state from raw parts. Intended for rules engines
    /// constructing the successor of an existing state.
    pub fn from_parts(pits: [u32; PIT_COUNT], stores: [u32; 2], to_move: Side) -> Self {
        Self {
            pits,
            stores,
            to_move,
        }
    }

    /// All pit counts in board order.
    pub fn pits(&self) -> &[u32; PIT_COUNT] {
        &self.pits
    }

    /// Seed count of a single pit, if the index is on the board.
    pub fn pit(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// Both kazan totals, indexed by [`Side::store_index`].
    pub fn stores(&self) -> [u32; 2] {
        self.stores
    }

    /// Kazan total for one side.
    pub fn store(&self, side: Side) -> u32 {
        self.stores[side.store_index()]
    }

    /// The side eligible to move in this position.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Pit indices owned by a side.
    pub fn row(side: Side) -> Range<usize> {
        match side {
            Side::Bottom => 0..PITS_PER_SIDE,
            Side::Top => PITS_PER_SIDE..PIT_COUNT,
        }
    }

    /// Total seeds in play: every pit plus both kazans. Conserved across
    /// any rules-engine transition.
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().sum::<u32>() + self.stores[0] + self.stores[1]
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_start() {
        let state = BoardState::new();
        assert!(state.pits().iter().all(|&p| p == DEFAULT_SEEDS));
        assert_eq!(state.stores(), [0, 0]);
        assert_eq!(state.to_move(), Side::Bottom);
        assert_eq!(state.total_seeds(), DEFAULT_SEEDS * PIT_COUNT as u32);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(BoardState::new(), BoardState::default());
        assert_ne!(BoardState::new(), BoardState::with_seeds(5));
    }

    #[test]
    fn rows_partition_the_board() {
        let bottom: Vec<_> = BoardState::row(Side::Bottom).collect();
        let top: Vec<_> = BoardState::row(Side::Top).collect();
        assert_eq!(bottom, (0..9).collect::<Vec<_>>());
        assert_eq!(top, (9..18).collect::<Vec<_>>());
    }

    #[test]
    fn move_id_bounds() {
        assert!(MoveId::new(0).is_some());
        assert!(MoveId::new(17).is_some());
        assert!(MoveId::new(18).is_none());
        assert_eq!(MoveId::new(2).unwrap().number(), 3);
    }
}
