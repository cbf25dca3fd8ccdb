//! Game-over detection and turn continuation.
//!
//! The game ends as soon as either row is completely empty. At that point
//! each side banks whatever is left in its own holes. A move grants an
//! extra turn when its last marble drops into the mover's store.

use crate::board::{Board, Pit, Side, sowing_path};

/// True when all holes on either side are empty.
pub fn is_game_over(board: &Board) -> bool {
    board.row_is_empty(Side::A) || board.row_is_empty(Side::B)
}

/// Sweep every hole into its owner's store.
///
/// Finalizing a board with empty rows is a no-op, so this is idempotent.
pub fn finalize(board: &Board) -> Board {
    let mut done = *board;
    done.sweep_rows();
    done
}

/// The finalized board if the game is over, `None` otherwise.
///
/// Callers scoring a finished game must use the returned board rather
/// than the one they passed in.
pub fn terminal_state(board: &Board) -> Option<Board> {
    is_game_over(board).then(|| finalize(board))
}

/// Whether sowing `marbles` from `hole` ends in the mover's store.
///
/// Only the landing spot of the final marble matters, which depends on
/// nothing but the hole index and the marble count.
pub fn grants_extra_turn(hole: usize, marbles: u32) -> bool {
    match marbles as usize {
        0 => false,
        n => sowing_path(hole).nth(n - 1) == Some(Pit::Store),
    }
}

/// The side to move after `mover` sows `marbles` from `hole`.
#[inline]
pub fn next_to_move(mover: Side, hole: usize, marbles: u32) -> Side {
    if grants_extra_turn(hole, marbles) {
        mover
    } else {
        mover.opponent()
    }
}
