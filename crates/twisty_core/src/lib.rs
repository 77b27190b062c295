//! Piece, move, and puzzle state model shared by every twisty puzzle.
//!
//! A puzzle is a set of [`PieceGroup`]s, one per `(piece type, position)`
//! pair. What a move does is decided entirely by the puzzle's
//! [`PuzzleRules`]: each [`PieceBehavior`] reports which pieces of a group a
//! move displaces and how a single piece is transformed. [`GroupedPuzzle`]
//! applies moves in two phases so that no piece is overwritten before it has
//! been moved.

mod algorithm;
mod case;
mod color;
pub mod error;
mod group;
mod moves;
mod piece;
mod progress;
mod puzzle;
mod rules;

pub use algorithm::Algorithm;
pub use case::{Case, CaseSolver, Observation};
pub use color::Color;
pub use error::{MoveError, NotationError, PuzzleError, SolveError};
pub use group::{GroupKey, PieceGroup};
pub use moves::{Axis, Layer, Move};
pub use piece::{Piece, PieceType};
pub use progress::SolveProgress;
pub use puzzle::GroupedPuzzle;
pub use rules::{PieceBehavior, PuzzleRules};

/// Colors of a piece, in facelet order.
pub type PieceColors = smallvec::SmallVec<[Color; 3]>;

#[cfg(test)]
mod tests;
