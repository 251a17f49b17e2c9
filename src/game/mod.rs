//! Game flow around the board

/// Click handling and move bookkeeping
pub mod controller;

pub use controller::{MoveOutcome, PuzzleController};
