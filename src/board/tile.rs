//! Tiles and the home positions that identify them

use std::fmt;

use crate::io::configuration::{GRID_COLS, GRID_ROWS};

/// Row and column a tile occupies in the solved arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HomePosition {
    /// Row in `0..GRID_ROWS`
    pub row: usize,
    /// Column in `0..GRID_COLS`
    pub col: usize,
}

impl HomePosition {
    /// Create a home position from row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Home position of the slot at a row-major index
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_COLS,
            col: index % GRID_COLS,
        }
    }

    /// Row-major slot index of this position
    pub const fn index(self) -> usize {
        self.row * GRID_COLS + self.col
    }

    /// Whether the position lies inside the fixed grid
    pub const fn is_valid(self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }
}

impl fmt::Display for HomePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a tile shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Face<I> {
    /// A fragment of the source picture
    Image(I),
    /// The blank tile that moves around the board
    Empty,
}

/// One cell of the puzzle grid
///
/// The home position is fixed at creation. Only the slot a tile sits in
/// changes during play, and that is tracked by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<I> {
    home: HomePosition,
    face: Face<I>,
}

impl<I> Tile<I> {
    /// Create a tile carrying a picture fragment
    pub const fn image(home: HomePosition, image: I) -> Self {
        Self {
            home,
            face: Face::Image(image),
        }
    }

    /// Create the blank tile
    pub const fn empty(home: HomePosition) -> Self {
        Self {
            home,
            face: Face::Empty,
        }
    }

    /// Position this tile belongs at when the puzzle is solved
    pub const fn home(&self) -> HomePosition {
        self.home
    }

    /// Face shown by this tile
    pub const fn face(&self) -> &Face<I> {
        &self.face
    }

    /// Picture fragment, or `None` for the blank tile
    pub const fn image_ref(&self) -> Option<&I> {
        match &self.face {
            Face::Image(image) => Some(image),
            Face::Empty => None,
        }
    }

    /// Whether this is the blank tile
    pub const fn is_empty(&self) -> bool {
        matches!(self.face, Face::Empty)
    }
}
