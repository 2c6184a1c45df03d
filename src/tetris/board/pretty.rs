use super::Board;
use crate::tetris::prelude::*;
use itertools::Itertools;

impl Board {
    /// Pretty-prints the board, one line per row.
    pub fn pretty(&self) -> String {
        self.cells.chunks(self.columns.max(1)).map(|row| row.iter().collect::<String>()).join("\n")
    }

    /// Pretty-prints the board with a falling piece drawn over it. Blocks above the board are
    /// not drawn.
    pub fn pretty_with<S: RotatableGrid + Clone>(&self, piece: &MovablePiece<S>) -> String {
        (0..self.rows as i32).map(|row| {
            (0..self.columns as i32).map(|col| {
                let outer = Point::new(row, col);
                if piece.is_at(&outer) { piece.cell_at_outer(&outer) } else { self.cell_at(&outer) }
            }).collect::<String>()
        }).join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty().replace('\n', "/"))
    }
}
