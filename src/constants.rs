//! Constants for board geometry, search horizon, and evaluation weights.
//!
//! All values are fixed for the lifetime of the process. The only tunable
//! knob exposed at runtime is the search depth, which the search entry
//! points take as a parameter (defaulting to [`SEARCH_DEPTH`]).

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of playable holes on each side of the board.
pub const HOLES: usize = 6;

/// Marbles placed in every hole at the start of a game.
pub const INITIAL_MARBLES_PER_HOLE: u32 = 4;

/// Total marbles in play (holes plus both stores). Every transition preserves it.
pub const TOTAL_MARBLES: u32 = 2 * HOLES as u32 * INITIAL_MARBLES_PER_HOLE;

/// Length of one full sowing lap: own holes, own store, opponent holes.
///
/// The opponent's store is never sown into, so it is not part of the lap.
pub const LAP: usize = 2 * HOLES + 1;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default number of plies the search looks ahead.
pub const SEARCH_DEPTH: u32 = 10;

/// Ply cap for self-play games.
pub const MAX_GAME_PLIES: usize = 500;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the store differential (store A minus store B).
pub const SCORE_WEIGHT: i32 = 3;

/// Weight of marbles still sitting in the evaluated side's own holes.
pub const PLAYER_MARBLES_WEIGHT: i32 = 1;

/// Weight of marbles sitting in the opponent's holes.
pub const OPPONENT_MARBLES_WEIGHT: i32 = -1;

/// Score per remaining ply awarded for a decided game.
pub const WIN_SCORE: i32 = 1000;
