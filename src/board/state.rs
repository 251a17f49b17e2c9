//! Board state: the ordered tile slots and the one legal move
//!
//! Slots are stored row-major, so slot `i` is drawn at row `i / 3`,
//! column `i % 3`. The board always holds every home position exactly once
//! and exactly one blank tile; constructors reject anything else so the
//! query operations below can stay total.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::adjacency::AdjacencyRule;
use crate::board::tile::{HomePosition, Tile};
use crate::io::configuration::{EMPTY_HOME_INDEX, TILE_COUNT};
use crate::io::error::{Result, invalid_board};

/// Canonical row-major order of home positions
pub fn solution() -> [HomePosition; TILE_COUNT] {
    std::array::from_fn(HomePosition::from_index)
}

/// Current arrangement of the twelve tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<I> {
    slots: Vec<Tile<I>>,
    rule: AdjacencyRule,
}

impl<I> Board<I> {
    /// Build the solved board from the picture fragments
    ///
    /// `images` are the fragments for home positions `0..11` in row-major
    /// order; the blank tile takes the final home position.
    ///
    /// # Errors
    ///
    /// Returns an error if `images` does not hold exactly one fragment per
    /// non-blank slot
    pub fn solved(images: Vec<I>, rule: AdjacencyRule) -> Result<Self> {
        if images.len() != TILE_COUNT - 1 {
            return Err(invalid_board(&format!(
                "expected {} picture tiles, got {}",
                TILE_COUNT - 1,
                images.len()
            )));
        }

        let mut slots: Vec<Tile<I>> = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| Tile::image(HomePosition::from_index(index), image))
            .collect();
        slots.push(Tile::empty(HomePosition::from_index(EMPTY_HOME_INDEX)));

        Ok(Self { slots, rule })
    }

    /// Build a board from tiles already in slot order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list does not hold exactly one tile per slot
    /// - There is not exactly one blank tile
    /// - A home position lies outside the grid or appears twice
    pub fn from_tiles(tiles: Vec<Tile<I>>, rule: AdjacencyRule) -> Result<Self> {
        if tiles.len() != TILE_COUNT {
            return Err(invalid_board(&format!(
                "expected {TILE_COUNT} tiles, got {}",
                tiles.len()
            )));
        }

        let empty_count = tiles.iter().filter(|tile| tile.is_empty()).count();
        if empty_count != 1 {
            return Err(invalid_board(&format!(
                "expected exactly one blank tile, got {empty_count}"
            )));
        }

        let mut seen = [false; TILE_COUNT];
        for tile in &tiles {
            let home = tile.home();
            if !home.is_valid() {
                return Err(invalid_board(&format!(
                    "home position {home} lies outside the grid"
                )));
            }
            match seen.get_mut(home.index()) {
                Some(flag) if !*flag => *flag = true,
                _ => {
                    return Err(invalid_board(&format!(
                        "home position {home} appears more than once"
                    )));
                }
            }
        }

        Ok(Self { slots: tiles, rule })
    }

    /// Build a board and shuffle it once, ready for play
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Board::solved`]
    pub fn shuffled<R: Rng + ?Sized>(
        images: Vec<I>,
        rule: AdjacencyRule,
        rng: &mut R,
    ) -> Result<Self> {
        let mut board = Self::solved(images, rule)?;
        board.shuffle(rng);
        Ok(board)
    }

    /// Tiles in slot order
    pub fn slots(&self) -> &[Tile<I>] {
        &self.slots
    }

    /// Tile at a slot, if the index is on the board
    pub fn tile(&self, index: usize) -> Option<&Tile<I>> {
        self.slots.get(index)
    }

    /// Adjacency rule used to judge moves
    pub const fn rule(&self) -> AdjacencyRule {
        self.rule
    }

    /// Home positions in slot order
    pub fn home_positions(&self) -> Vec<HomePosition> {
        self.slots.iter().map(Tile::home).collect()
    }

    /// Slot index of the blank tile
    pub fn index_of_empty(&self) -> usize {
        // Constructors guarantee a blank tile; the fallback is unreachable
        self.slots
            .iter()
            .position(Tile::is_empty)
            .unwrap_or(EMPTY_HOME_INDEX)
    }

    /// Whether slots `i` and `j` are neighbours under the board's rule
    pub const fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.rule.is_adjacent(i, j)
    }

    /// Swap the clicked slot with the blank one if they are neighbours
    ///
    /// Returns `true` when the board changed. Clicking a slot that is not
    /// next to the blank, the blank itself, or an index off the board
    /// leaves the board untouched.
    pub fn try_swap(&mut self, clicked: usize) -> bool {
        let empty = self.index_of_empty();
        if clicked >= self.slots.len() || !self.is_adjacent(clicked, empty) {
            return false;
        }
        self.slots.swap(clicked, empty);
        true
    }

    /// Whether every tile sits at its home position
    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .map(Tile::home)
            .eq(solution())
    }

    /// Randomly reorder the picture tiles and park the blank in the last slot
    ///
    /// Every permutation of the eleven picture tiles is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self.slots.remove(self.index_of_empty());
        self.slots.shuffle(rng);
        self.slots.push(empty);
    }
}
