//! An agent for playing the pawn-capture board game 'Hexapawn'
//!
//! This agent builds the full tree of positions a fixed number of plies
//! ahead and runs a minimax evaluation over it to find the best next
//! move for either player on any square board.
//!
//! # Basic Usage
//!
//! ```
//! use hexapawn_ai::board::{Board, Color};
//! use hexapawn_ai::solver::{SearchResult, Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_rows(&["---", "b-w", "---"], 3)?;
//! let mut solver = Solver::new(board, Color::Black, 1);
//!
//! let chosen = Board::from_rows(&["b--", "--w", "---"], 3)?;
//! assert_eq!(solver.solve(), SearchResult::Best { board: chosen, score: 10 });
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod tree;

pub mod solver;

mod test;

// a win and a loss must mirror each other, or the evaluation would not be
// antisymmetric between the two colors
const_assert!(solver::WIN_SCORE == -solver::LOSS_SCORE);
const_assert!(solver::WIN_SCORE > 0);
