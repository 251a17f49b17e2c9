//! Single owner of the board that turns clicks into moves

use log::{debug, info, trace};

use crate::board::Board;

/// Result of clicking a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The slot was not next to the blank; nothing changed
    Ignored,
    /// A tile moved into the blank slot
    Moved,
    /// A tile moved and the picture is now complete
    Solved,
}

impl MoveOutcome {
    /// Whether the board changed and the view must be redrawn
    pub const fn needs_redraw(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the board for the lifetime of the game
///
/// The view keeps no copy of the arrangement. It reads [`Self::board`]
/// again after every click that reports a change.
#[derive(Debug)]
pub struct PuzzleController<I> {
    board: Board<I>,
    moves: usize,
    solved_notice: bool,
}

impl<I> PuzzleController<I> {
    /// Take ownership of a prepared board
    pub const fn new(board: Board<I>) -> Self {
        Self {
            board,
            moves: 0,
            solved_notice: false,
        }
    }

    /// Handle a click on `slot`
    ///
    /// Input is never locked: clicks keep moving tiles after the puzzle has
    /// been solved, and the notice is withdrawn once the picture breaks up
    /// again.
    pub fn click(&mut self, slot: usize) -> MoveOutcome {
        let empty = self.board.index_of_empty();
        if !self.board.try_swap(slot) {
            trace!("Ignored click on slot {slot} (blank at {empty})");
            return MoveOutcome::Ignored;
        }

        self.moves += 1;
        debug!("Moved slot {slot} into blank at {empty} (move {})", self.moves);

        if self.board.is_solved() {
            self.solved_notice = true;
            info!("Puzzle solved in {} moves", self.moves);
            MoveOutcome::Solved
        } else {
            self.solved_notice = false;
            MoveOutcome::Moved
        }
    }

    /// Current arrangement
    pub const fn board(&self) -> &Board<I> {
        &self.board
    }

    /// Number of accepted moves so far
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Whether the tiles are currently in their home positions
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Whether the completion notice should be showing
    pub const fn solved_notice(&self) -> bool {
        self.solved_notice
    }
}
