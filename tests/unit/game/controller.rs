//! Tests for click handling and the completion notice

#[cfg(test)]
mod tests {
    use swaptile::board::{AdjacencyRule, Board, HomePosition, Tile};
    use swaptile::game::{MoveOutcome, PuzzleController};

    fn controller_from_order(order: &[usize]) -> PuzzleController<usize> {
        let tiles = order
            .iter()
            .map(|&home| {
                let position = HomePosition::from_index(home);
                if home == 11 {
                    Tile::empty(position)
                } else {
                    Tile::image(position, home)
                }
            })
            .collect();
        match Board::from_tiles(tiles, AdjacencyRule::IndexDistance) {
            Ok(board) => PuzzleController::new(board),
            Err(err) => unreachable!("test board should be valid: {err}"),
        }
    }

    // Tests a click away from the blank is ignored and not counted
    // Verified by counting every click as a move
    #[test]
    fn test_ignored_click() {
        let mut controller = controller_from_order(&[0, 1, 2, 3, 4, 11, 6, 7, 8, 9, 10, 5]);

        assert_eq!(controller.click(1), MoveOutcome::Ignored);
        assert_eq!(controller.moves(), 0);
        assert_eq!(controller.board().index_of_empty(), 5);
        assert!(!MoveOutcome::Ignored.needs_redraw());
    }

    // Tests the move that restores the picture reports Solved
    // Verified by checking the solved state before the swap
    #[test]
    fn test_solving_click() {
        let mut controller = controller_from_order(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 10]);
        assert!(!controller.is_solved());
        assert!(!controller.solved_notice());

        let outcome = controller.click(11);
        assert_eq!(outcome, MoveOutcome::Solved);
        assert!(outcome.needs_redraw());
        assert!(controller.is_solved());
        assert!(controller.solved_notice());
        assert_eq!(controller.moves(), 1);
    }

    // Tests input stays live after solving and the notice is withdrawn
    // Verified by locking the board once solved
    #[test]
    fn test_moves_continue_after_solving() {
        let mut controller = controller_from_order(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 10]);
        assert_eq!(controller.click(11), MoveOutcome::Solved);

        assert_eq!(controller.click(8), MoveOutcome::Moved);
        assert!(!controller.solved_notice());
        assert_eq!(controller.board().index_of_empty(), 8);

        assert_eq!(controller.click(11), MoveOutcome::Solved);
        assert!(controller.solved_notice());
        assert_eq!(controller.moves(), 3);
    }

    // Tests clicking the blank itself never counts as a move
    // Verified by treating distance zero as adjacent
    #[test]
    fn test_clicking_blank_is_ignored() {
        let mut controller = controller_from_order(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(controller.click(11), MoveOutcome::Ignored);
        assert!(controller.is_solved());
        assert!(!controller.solved_notice());
    }
}
