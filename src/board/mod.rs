//! Board model for the sliding picture puzzle
//!
//! This module contains:
//! - Tiles and their home positions
//! - The adjacency rule deciding which moves are legal
//! - The board itself with its swap, shuffle and solved check

/// Neighbour test between two slots
pub mod adjacency;
/// Ordered tile slots and the move operations on them
pub mod state;
/// Tile and home position types
pub mod tile;

pub use adjacency::AdjacencyRule;
pub use state::{Board, solution};
pub use tile::{Face, HomePosition, Tile};
