//! Engine-versus-engine games.
//!
//! Plays a full game where the engine chooses moves for both sides,
//! honouring extra turns. An optional number of opening plies can be
//! played at random (seeded, so games are reproducible) to vary the
//! openings the engine sees.

use tracing::info;

use crate::board::{Board, Side};
use crate::constants::{MAX_GAME_PLIES, SEARCH_DEPTH};
use crate::rules::{finalize, is_game_over, next_to_move};
use crate::search::choose_move;

/// Settings for a self-play game.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Search depth used for every engine move.
    pub depth: u32,
    /// Number of opening plies chosen uniformly at random.
    pub random_plies: usize,
    /// Seed for the random opening plies.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            random_plies: 0,
            seed: 1,
        }
    }
}

/// One move of a recorded game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Side,
    pub hole: usize,
    /// Board after the move.
    pub board: Board,
    pub extra_turn: bool,
    /// True if the move was a random opening ply rather than a searched one.
    pub random: bool,
}

/// A finished (or length-capped) game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<PlayedMove>,
    /// Board after end-of-game finalization.
    pub final_board: Board,
}

impl GameRecord {
    /// The side with more marbles in its store, or `None` on a tie.
    pub fn winner(&self) -> Option<Side> {
        let a = self.final_board.store(Side::A);
        let b = self.final_board.store(Side::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Play from `start` with `first` to move until the game ends.
pub fn play_game(start: Board, first: Side, config: &SelfPlayConfig) -> GameRecord {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let mut board = start;
    let mut side = first;
    let mut moves = Vec::new();

    while !is_game_over(&board) && moves.len() < MAX_GAME_PLIES {
        let random = moves.len() < config.random_plies;
        let hole = if random {
            let legal: Vec<usize> = board.legal_moves(side).collect();
            legal[rng.usize(..legal.len())]
        } else {
            match choose_move(&board, config.depth, side).best_move {
                Some(hole) => hole,
                None => break,
            }
        };

        let marbles = board.hole(side, hole);
        board = board.sow(side, hole);
        let next = next_to_move(side, hole, marbles);
        let extra_turn = next == side;

        info!(ply = moves.len() + 1, %side, hole, extra_turn, random, "move played");

        moves.push(PlayedMove {
            side,
            hole,
            board,
            extra_turn,
            random,
        });
        side = next;
    }

    GameRecord {
        moves,
        final_board: finalize(&board),
    }
}
