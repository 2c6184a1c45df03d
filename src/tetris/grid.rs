use crate::tetris::prelude::*;
use itertools::iproduct;

/// A read-only rectangle of cell markers.
pub trait Grid {
    fn rows(&self) -> usize;
    fn columns(&self) -> usize;

    /// The marker at the given point. Panics when the point is outside the grid; an
    /// out-of-range lookup is a coordinate bug, not a game event.
    fn cell_at(&self, point: &Point) -> char;

    /// Whether the point addresses a cell of this grid.
    fn contains(&self, point: &Point) -> bool {
        point.within(self.rows(), self.columns())
    }

    /// Checked cell lookup.
    fn get(&self, point: &Point) -> Result<char> {
        if self.contains(point) {
            Ok(self.cell_at(point))
        } else {
            Err(anyhow!(
                "point {point} is outside the {}x{} grid",
                self.rows(),
                self.columns()
            ))
        }
    }

    fn is_empty_at(&self, point: &Point) -> bool {
        self.cell_at(point) == EMPTY
    }
}

/// A grid that can produce its own quarter turns.
pub trait RotatableGrid: Grid + Sized {
    fn rotate_clockwise(&self) -> Self;
    fn rotate_counter_clockwise(&self) -> Self;

    /// Rotates in the given direction.
    fn rotate(&self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise        => self.rotate_clockwise(),
            Rotation::CounterClockwise => self.rotate_counter_clockwise(),
        }
    }
}

/// Every point of the grid, row-major.
pub fn all_points_of<G: Grid + ?Sized>(grid: &G) -> impl Iterator<Item = Point> {
    let (rows, columns) = (grid.rows() as i32, grid.columns() as i32);
    iproduct!(0..rows, 0..columns).map(|(row, col)| Point::new(row, col))
}

/// Every point of the grid that holds a block, row-major.
pub fn all_non_empty_points_of<G: Grid + ?Sized>(grid: &G) -> impl Iterator<Item = Point> {
    all_points_of(grid).filter(move |p| !grid.is_empty_at(p))
}
