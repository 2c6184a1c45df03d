use super::Board;
use crate::tetris::prelude::*;

impl Board {
    /// Linear index of an in-bounds point.
    pub(super) fn index(&self, point: &Point) -> usize {
        point.row as usize * self.columns + point.col as usize
    }
}

impl Grid for Board {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn cell_at(&self, point: &Point) -> char {
        if !self.contains(point) {
            panic!("point {point} is outside the {}x{} board", self.rows, self.columns);
        }
        self.cells[self.index(point)]
    }
}
