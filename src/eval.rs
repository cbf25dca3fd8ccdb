//! Static evaluation of leaf positions.
//!
//! Scores are always from side A's point of view: positive favours A.
//! Three terms are combined with the weights in [`crate::constants`]:
//!
//! 1. The store differential.
//! 2. Marbles in the evaluated side's own holes.
//! 3. Marbles in the opponent's holes (negatively weighted).
//!
//! Decided positions short-circuit to `±WIN_SCORE * depth`, so a win found
//! with more plies left to spare scores higher than a slower one.

use crate::board::{Board, Side};
use crate::constants::{
    OPPONENT_MARBLES_WEIGHT, PLAYER_MARBLES_WEIGHT, SCORE_WEIGHT, TOTAL_MARBLES, WIN_SCORE,
};
use crate::rules::is_game_over;

/// Evaluate `board` for the side `perspective`, with `depth` plies left.
pub fn evaluate(board: &Board, perspective: Side, depth: u32) -> i32 {
    let store_a = board.store(Side::A);
    let store_b = board.store(Side::B);
    let diff = store_a as i32 - store_b as i32;

    let mut mine = board.row_total(perspective) as i32;
    let mut theirs = board.row_total(perspective.opponent()) as i32;

    let over = is_game_over(board);
    let decided = WIN_SCORE.saturating_mul(i32::try_from(depth).unwrap_or(i32::MAX));

    if (mine > theirs && over) || store_a > TOTAL_MARBLES / 2 {
        return decided;
    }
    // Mirrors the win test; only the store majority can reach it.
    if (theirs < mine && over) || store_b > TOTAL_MARBLES / 2 {
        return -decided;
    }

    if perspective == Side::B {
        mine = -mine;
        theirs = -theirs;
    }

    diff * SCORE_WEIGHT + mine * PLAYER_MARBLES_WEIGHT + theirs * OPPONENT_MARBLES_WEIGHT
}
