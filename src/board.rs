//! Kalah board representation and the sowing transition.
//!
//! A [`Board`] is a small `Copy` value: two stores and two rows of
//! [`HOLES`] holes. Every simulated move derives a fresh board from its
//! parent, so search branches never share mutable state.
//!
//! Holes on both sides are indexed `0..HOLES` in sowing order, and hole `i`
//! on one side sits directly opposite hole `i` on the other side.

use std::fmt;

use thiserror::Error;

use crate::constants::{HOLES, INITIAL_MARBLES_PER_HOLE, LAP};

/// One of the two sides of the board.
///
/// Side `A` is always the maximizing side of the search; the snapshot
/// adapter decides which real player is mapped onto it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A position visited while sowing, relative to the mover.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pit {
    /// A hole on the mover's own row.
    Own(usize),
    /// The mover's store.
    Store,
    /// A hole on the opponent's row.
    Opponent(usize),
}

/// The endless sequence of pits visited when sowing from `hole`.
///
/// Starts at the hole after `hole`, runs to the end of the mover's row,
/// then the mover's store, then the whole opponent row, then wraps back
/// to the mover's hole 0. The opponent's store never appears.
pub fn sowing_path(hole: usize) -> impl Iterator<Item = Pit> {
    (hole + 1..).map(|k| match k % LAP {
        i if i < HOLES => Pit::Own(i),
        HOLES => Pit::Store,
        i => Pit::Opponent(i - HOLES - 1),
    })
}

/// Reasons a move request is rejected by [`Board::try_sow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("hole index {0} is out of range (expected 0..{n})", n = HOLES)]
    HoleOutOfRange(usize),
    #[error("hole {hole} on side {side} is empty")]
    EmptyHole { side: Side, hole: usize },
}

/// A snapshot of the board: both stores and both rows of holes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    stores: [u32; 2],
    holes: [[u32; HOLES]; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: every hole holds [`INITIAL_MARBLES_PER_HOLE`], stores empty.
    pub fn new() -> Self {
        Self {
            stores: [0; 2],
            holes: [[INITIAL_MARBLES_PER_HOLE; HOLES]; 2],
        }
    }

    /// Build a board from explicit store and hole counts for each side.
    pub fn from_parts(
        store_a: u32,
        holes_a: [u32; HOLES],
        store_b: u32,
        holes_b: [u32; HOLES],
    ) -> Self {
        Self {
            stores: [store_a, store_b],
            holes: [holes_a, holes_b],
        }
    }

    /// Marbles banked in `side`'s store.
    #[inline]
    pub fn store(&self, side: Side) -> u32 {
        self.stores[side.index()]
    }

    /// `side`'s row of holes, in sowing order.
    #[inline]
    pub fn holes(&self, side: Side) -> &[u32; HOLES] {
        &self.holes[side.index()]
    }

    /// Marbles in a single hole.
    #[inline]
    pub fn hole(&self, side: Side, hole: usize) -> u32 {
        self.holes[side.index()][hole]
    }

    /// Sum of the marbles left in `side`'s holes.
    pub fn row_total(&self, side: Side) -> u32 {
        self.holes(side).iter().sum()
    }

    /// True when every hole on `side` is empty.
    pub fn row_is_empty(&self, side: Side) -> bool {
        self.holes(side).iter().all(|&m| m == 0)
    }

    /// Every marble on the board, stores included.
    pub fn total_marbles(&self) -> u32 {
        self.stores.iter().sum::<u32>() + self.row_total(Side::A) + self.row_total(Side::B)
    }

    /// Holes `side` may legally sow from, in ascending order.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.holes(side)
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m > 0)
            .map(|(i, _)| i)
    }

    /// Sow the marbles of `hole` on `side` and return the resulting board.
    ///
    /// Marbles are dropped one at a time along [`sowing_path`]. When the
    /// last marble lands in a hole on the mover's row that was empty, it is
    /// joined by everything in the opposite hole, and the opposite hole is
    /// cleared. `self` is left untouched.
    ///
    /// The chosen hole must be non-empty; use [`Board::try_sow`] for a
    /// checked variant.
    pub fn sow(&self, side: Side, hole: usize) -> Board {
        debug_assert!(self.hole(side, hole) > 0, "sowing from an empty hole");

        let mut next = *self;
        let own = side.index();
        let opp = side.opponent().index();

        let marbles = next.holes[own][hole] as usize;
        next.holes[own][hole] = 0;

        for (k, pit) in sowing_path(hole).take(marbles).enumerate() {
            let last = k + 1 == marbles;
            match pit {
                Pit::Own(i) if last && next.holes[own][i] == 0 => {
                    next.holes[own][i] = 1 + next.holes[opp][i];
                    next.holes[opp][i] = 0;
                }
                Pit::Own(i) => next.holes[own][i] += 1,
                Pit::Store => next.stores[own] += 1,
                Pit::Opponent(i) => next.holes[opp][i] += 1,
            }
        }

        next
    }

    /// Checked form of [`Board::sow`].
    pub fn try_sow(&self, side: Side, hole: usize) -> Result<Board, BoardError> {
        if hole >= HOLES {
            return Err(BoardError::HoleOutOfRange(hole));
        }
        if self.hole(side, hole) == 0 {
            return Err(BoardError::EmptyHole { side, hole });
        }
        Ok(self.sow(side, hole))
    }

    /// Move every marble left in the holes into its own side's store.
    pub(crate) fn sweep_rows(&mut self) {
        for side in [Side::A, Side::B] {
            let i = side.index();
            self.stores[i] += self.holes[i].iter().sum::<u32>();
            self.holes[i] = [0; HOLES];
        }
    }
}

/// Draws B's row (right to left) above A's row, with B's store on the left
/// and A's store on the right, the way the board looks from A's seat.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "     ")?;
        for m in self.holes(Side::B).iter().rev() {
            write!(f, "[{m:>2}]")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "[{:>2}]{:width$}[{:>2}]",
            self.store(Side::B),
            "",
            self.store(Side::A),
            width = 4 * HOLES + 2
        )?;
        write!(f, "     ")?;
        for m in self.holes(Side::A) {
            write!(f, "[{m:>2}]")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_MARBLES;

    #[test]
    fn test_opening_board() {
        let board = Board::new();
        assert_eq!(board.total_marbles(), TOTAL_MARBLES);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(board.store(Side::B), 0);
        assert_eq!(board.legal_moves(Side::A).count(), HOLES);
    }

    #[test]
    fn test_sowing_path_wraps_past_own_store_only() {
        let path: Vec<Pit> = sowing_path(4).take(LAP + 1).collect();
        assert_eq!(path[0], Pit::Own(5));
        assert_eq!(path[1], Pit::Store);
        assert_eq!(path[2], Pit::Opponent(0));
        assert_eq!(path[7], Pit::Opponent(5));
        assert_eq!(path[8], Pit::Own(0));
        assert_eq!(path[12], Pit::Own(4));
        assert_eq!(path[13], Pit::Own(5));
    }

    #[test]
    fn test_sow_does_not_modify_input() {
        let board = Board::new();
        let next = board.sow(Side::A, 2);
        assert_eq!(board, Board::new());
        assert_eq!(next.hole(Side::A, 2), 0);
        assert_eq!(next.holes(Side::A), &[4, 4, 0, 5, 5, 5]);
        assert_eq!(next.store(Side::A), 1);
        assert_eq!(next.holes(Side::B), &[4; HOLES]);
    }

    #[test]
    fn test_sow_for_side_b_mirrors_side_a() {
        let board = Board::new();
        let next = board.sow(Side::B, 5);
        assert_eq!(next.hole(Side::B, 5), 0);
        assert_eq!(next.store(Side::B), 1);
        assert_eq!(next.holes(Side::A), &[5, 5, 5, 4, 4, 4]);
        assert_eq!(next.store(Side::A), 0);
    }

    #[test]
    fn test_try_sow_rejects_bad_holes() {
        let board = Board::from_parts(0, [0, 4, 4, 4, 4, 4], 4, [4; HOLES]);
        assert_eq!(
            board.try_sow(Side::A, 0),
            Err(BoardError::EmptyHole {
                side: Side::A,
                hole: 0
            })
        );
        assert_eq!(
            board.try_sow(Side::A, HOLES),
            Err(BoardError::HoleOutOfRange(HOLES))
        );
        assert!(board.try_sow(Side::A, 1).is_ok());
    }

    #[test]
    fn test_board_error_messages() {
        assert_eq!(
            BoardError::HoleOutOfRange(9).to_string(),
            "hole index 9 is out of range (expected 0..6)"
        );
        assert_eq!(
            BoardError::EmptyHole {
                side: Side::B,
                hole: 3
            }
            .to_string(),
            "hole 3 on side B is empty"
        );
    }

    #[test]
    fn test_display_layout() {
        let board = Board::from_parts(7, [1, 2, 3, 4, 5, 6], 9, [6, 5, 4, 3, 2, 1]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "     [ 1][ 2][ 3][ 4][ 5][ 6]");
        assert!(lines[1].starts_with("[ 9]"));
        assert!(lines[1].ends_with("[ 7]"));
        assert_eq!(lines[2], "     [ 1][ 2][ 3][ 4][ 5][ 6]");
    }
}
