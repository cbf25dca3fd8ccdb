//! Depth-limited minimax with alpha-beta pruning.
//!
//! Side A maximizes and side B minimizes. After each simulated move the
//! same side moves again if the move earned an extra turn, otherwise the
//! turn passes. Leaves (finished games or exhausted depth) are scored with
//! [`evaluate`] from the perspective of the side to move at that leaf.
//!
//! Two entry points share one recursive body:
//!
//! - [`choose_move`] searches from the root and reports the best hole.
//! - [`score_node`] returns the propagated score of a position.
//!
//! # Example
//!
//! ```
//! use kalah_rust::board::{Board, Side};
//! use kalah_rust::search::choose_move;
//!
//! let result = choose_move(&Board::new(), 4, Side::A);
//! assert!(result.best_move.is_some());
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Side};
use crate::eval::evaluate;
use crate::rules::{finalize, is_game_over, next_to_move, terminal_state};

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best hole for the side to move, or `None` if the game is already over.
    pub best_move: Option<usize>,
    /// Propagated score of the root position (positive favours side A).
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
    /// Sibling loops cut short by pruning.
    pub cutoffs: u64,
}

/// Pick the best hole for `to_move` looking `depth` plies ahead.
///
/// A non-terminal root is always expanded, even at depth 0, so a move is
/// reported whenever one exists.
pub fn choose_move(board: &Board, depth: u32, to_move: Side) -> SearchResult {
    let mut searcher = Searcher::default();
    searcher.nodes += 1;

    let (score, best_move) = match terminal_state(board) {
        Some(done) => (evaluate(&done, to_move, depth), None),
        None => searcher.expand(board, depth.max(1), i32::MIN, i32::MAX, to_move, true),
    };

    debug!(
        side = %to_move,
        depth,
        ?best_move,
        score,
        nodes = searcher.nodes,
        cutoffs = searcher.cutoffs,
        "root search finished"
    );

    SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
    }
}

/// Score `board` with `to_move` to play, searching `depth` plies within
/// the `(alpha, beta)` window.
pub fn score_node(board: &Board, depth: u32, alpha: i32, beta: i32, to_move: Side) -> i32 {
    Searcher::default().node(board, depth, alpha, beta, to_move)
}

/// Per-search counters.
#[derive(Default)]
struct Searcher {
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    fn node(&mut self, board: &Board, depth: u32, alpha: i32, beta: i32, to_move: Side) -> i32 {
        self.nodes += 1;

        let over = is_game_over(board);
        if over || depth == 0 {
            let leaf = if over { finalize(board) } else { *board };
            return evaluate(&leaf, to_move, depth);
        }

        self.expand(board, depth, alpha, beta, to_move, false).0
    }

    /// Try every legal hole for `to_move` and return the best score with
    /// the hole that produced it. Ties keep the lowest hole.
    ///
    /// `depth` must be at least 1. With `root` set, each child's score is
    /// logged at trace level.
    fn expand(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Side,
        root: bool,
    ) -> (i32, Option<usize>) {
        let maximizing = to_move == Side::A;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_hole = None;

        for hole in board.legal_moves(to_move) {
            let marbles = board.hole(to_move, hole);
            let child = board.sow(to_move, hole);
            let next = next_to_move(to_move, hole, marbles);

            let value = self.node(&child, depth - 1, alpha, beta, next);
            if root {
                trace!(hole, value, "root move scored");
            }

            if maximizing {
                if value > best {
                    best = value;
                    best_hole = Some(hole);
                }
                alpha = alpha.max(value);
            } else {
                if value < best {
                    best = value;
                    best_hole = Some(hole);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        (best, best_hole)
    }
}
