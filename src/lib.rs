//! Kalah-Rust: a minimax move finder for six-hole Kalah.
//!
//! Given a board snapshot, the engine searches a fixed number of plies
//! with alpha-beta pruning and reports the hole the side to move should
//! sow from.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search depth, and evaluation weights
//! - [`board`] - Board value type and the sowing/capture transition
//! - [`rules`] - Game-over detection, finalization, and extra turns
//! - [`eval`] - Static evaluation of leaf positions
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`snapshot`] - Snapshot input format and move output
//! - [`selfplay`] - Engine-versus-engine games
//!
//! ## Example
//!
//! ```
//! use kalah_rust::board::{Board, Side};
//! use kalah_rust::search::choose_move;
//!
//! // Standard opening, side A to move
//! let board = Board::new();
//!
//! // Look four plies ahead
//! let result = choose_move(&board, 4, Side::A);
//! let hole = result.best_move.expect("opening has legal moves");
//! println!("Sow from hole {}", hole + 1);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod snapshot;
