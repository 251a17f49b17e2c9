//! Move legality between two board slots

use crate::io::configuration::GRID_COLS;

/// Rule deciding whether two slots are neighbours
///
/// `IndexDistance` compares row-major indices only, so the last slot of a
/// row and the first slot of the next row count as horizontal neighbours
/// (pairs 2/3, 5/6 and 8/9). `GridNeighbor` compares rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRule {
    /// Neighbours when indices differ by one or by a full row width
    #[default]
    IndexDistance,
    /// Neighbours when they share an edge on the grid
    GridNeighbor,
}

impl AdjacencyRule {
    /// Whether slots `a` and `b` are neighbours under this rule
    pub const fn is_adjacent(self, a: usize, b: usize) -> bool {
        match self {
            Self::IndexDistance => {
                let distance = a.abs_diff(b);
                distance == 1 || distance == GRID_COLS
            }
            Self::GridNeighbor => {
                let (row_a, col_a) = (a / GRID_COLS, a % GRID_COLS);
                let (row_b, col_b) = (b / GRID_COLS, b % GRID_COLS);
                (row_a == row_b && col_a.abs_diff(col_b) == 1)
                    || (col_a == col_b && row_a.abs_diff(row_b) == 1)
            }
        }
    }
}
