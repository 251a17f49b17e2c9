//! Sliding picture puzzle
//!
//! A picture is cut into a 4x3 grid of tiles, the bottom-right tile is taken
//! away, and the other eleven are shuffled. Clicking a tile next to the blank
//! slot swaps the two, and the game is won when every tile is home again.

#![forbid(unsafe_code)]

/// Tiles, adjacency and the board they are arranged on
pub mod board;
/// Click handling around the board
pub mod game;
/// Command line, configuration, errors and image loading
pub mod io;
/// Layout, rendering and the desktop window
pub mod view;

pub use io::error::{PuzzleError, Result};
