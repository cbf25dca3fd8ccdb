//! Board snapshot input format and move output.
//!
//! A snapshot is 14 whitespace-separated integers:
//!
//! ```text
//! player
//! player1_store
//! p1_hole0 p1_hole1 p1_hole2 p1_hole3 p1_hole4 p1_hole5
//! player2_store
//! p2_hole0 p2_hole1 p2_hole2 p2_hole3 p2_hole4 p2_hole5
//! ```
//!
//! Player 1 always occupies side A (the maximizing side), player 2 side B.
//! `player` names who is to move. The chosen move is written back as a
//! 1-based hole number.
//!
//! ## Example
//!
//! ```
//! use kalah_rust::snapshot::{Snapshot, format_move};
//!
//! let snap: Snapshot = "1 0 4 4 4 4 4 4 0 4 4 4 4 4 4".parse().unwrap();
//! assert_eq!(snap.board.total_marbles(), 48);
//! assert_eq!(format_move(2), "3");
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Side};
use crate::constants::{HOLES, TOTAL_MARBLES};

/// Number of integers in a snapshot.
const FIELD_COUNT: usize = 2 * HOLES + 3;

/// Names of the snapshot fields, in input order, for error messages.
const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "player",
    "player 1 store",
    "player 1 hole 1",
    "player 1 hole 2",
    "player 1 hole 3",
    "player 1 hole 4",
    "player 1 hole 5",
    "player 1 hole 6",
    "player 2 store",
    "player 2 hole 1",
    "player 2 hole 2",
    "player 2 hole 3",
    "player 2 hole 4",
    "player 2 hole 5",
    "player 2 hole 6",
];

/// Reasons a snapshot is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("missing value for {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {field}: expected an integer")]
    NotAnInteger { field: &'static str, value: String },
    #[error("invalid marble count {value} for {field}")]
    InvalidCount { field: &'static str, value: i64 },
    #[error("unknown player {0}: expected 1 or 2")]
    UnknownPlayer(i64),
    #[error("unexpected trailing value {0:?}")]
    Trailing(String),
    #[error("board holds {found} marbles, expected {expected}")]
    MarbleCount { found: u32, expected: u32 },
}

/// One of the two real players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The board side this player occupies.
    pub fn side(self) -> Side {
        match self {
            Player::One => Side::A,
            Player::Two => Side::B,
        }
    }
}

/// A parsed, validated snapshot: the board and who is to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub player: Player,
    pub board: Board,
}

impl Snapshot {
    /// The side the search should move for.
    pub fn side_to_move(&self) -> Side {
        self.player.side()
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = input.split_whitespace();
        let mut values = [0i64; FIELD_COUNT];

        for (slot, field) in values.iter_mut().zip(FIELD_NAMES) {
            let token = tokens.next().ok_or(SnapshotError::Missing(field))?;
            *slot = token.parse().map_err(|_| SnapshotError::NotAnInteger {
                field,
                value: token.to_string(),
            })?;
        }
        if let Some(extra) = tokens.next() {
            return Err(SnapshotError::Trailing(extra.to_string()));
        }

        let player = match values[0] {
            1 => Player::One,
            2 => Player::Two,
            other => return Err(SnapshotError::UnknownPlayer(other)),
        };

        let mut counts = [0u32; FIELD_COUNT - 1];
        let fields = values[1..].iter().zip(&FIELD_NAMES[1..]);
        for (count, (&value, &field)) in counts.iter_mut().zip(fields) {
            *count = u32::try_from(value)
                .map_err(|_| SnapshotError::InvalidCount { field, value })?;
        }

        let row = |start: usize| -> [u32; HOLES] {
            let mut holes = [0; HOLES];
            holes.copy_from_slice(&counts[start..start + HOLES]);
            holes
        };
        let board = Board::from_parts(counts[0], row(1), counts[HOLES + 1], row(HOLES + 2));

        let found = board.total_marbles();
        if found != TOTAL_MARBLES {
            return Err(SnapshotError::MarbleCount {
                found,
                expected: TOTAL_MARBLES,
            });
        }

        Ok(Snapshot { player, board })
    }
}

/// Render a 0-based hole index as the 1-based number players use.
pub fn format_move(hole: usize) -> String {
    (hole + 1).to_string()
}
