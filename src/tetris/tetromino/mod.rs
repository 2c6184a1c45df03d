pub mod transform;

use super::prelude::*;

use itertools::{iproduct, Itertools};
pub use transform::Rotation;

/// An immutable cell grid describing one orientation of a piece in its own coordinates.
///
/// Storage is a fixed `MAX_EXTENT x MAX_EXTENT` array; only the leading `rows x columns`
/// block is live and everything past it is kept `EMPTY`, so two shapes with the same
/// extents and cells compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
    cells: [[char; MAX_EXTENT]; MAX_EXTENT],
}

impl Shape {
    /// Builds a shape from its rows. Fails on ragged rows or extents past `MAX_EXTENT`.
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Shape> {
        let Some(first) = rows.first() else {
            return Err(anyhow!("a shape needs at least one row"));
        };
        let columns = first.len();
        if columns == 0 {
            return Err(anyhow!("a shape needs at least one column"));
        }
        if rows.len() > MAX_EXTENT || columns > MAX_EXTENT {
            return Err(anyhow!(
                "shape of {}x{} exceeds the {MAX_EXTENT}x{MAX_EXTENT} limit",
                rows.len(),
                columns
            ));
        }

        let mut cells = [[EMPTY; MAX_EXTENT]; MAX_EXTENT];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(anyhow!("row {r} has {} cells, expected {columns}", row.len()));
            }
            cells[r][..columns].copy_from_slice(row);
        }
        Ok(Shape { rows: rows.len(), columns, cells })
    }

    /// The shape produced by the given quarter turn.
    fn rotated(&self, rotation: Rotation) -> Shape {
        let (rows, columns) = rotation.extents(self.rows, self.columns);
        let mut cells = [[EMPTY; MAX_EXTENT]; MAX_EXTENT];
        for (r, c) in iproduct!(0..rows, 0..columns) {
            let source = rotation.source_of(&Point::new(r as i32, c as i32), self.rows, self.columns);
            cells[r][c] = self.cell_at(&source);
        }
        Shape { rows, columns, cells }
    }
}

impl Grid for Shape {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn cell_at(&self, point: &Point) -> char {
        if !self.contains(point) {
            panic!("point {point} is outside the {}x{} shape", self.rows, self.columns);
        }
        self.cells[point.row as usize][point.col as usize]
    }
}

impl RotatableGrid for Shape {
    fn rotate_clockwise(&self) -> Shape {
        self.rotated(Rotation::Clockwise)
    }

    fn rotate_counter_clockwise(&self) -> Shape {
        self.rotated(Rotation::CounterClockwise)
    }
}

impl std::str::FromStr for Shape {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rows = parse_rows(s)?;
        Shape::from_rows(&rows).with_context(|| format!("could not build a shape from {s}"))
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = self.cells[..self.rows]
            .iter()
            .map(|row| row[..self.columns].iter().collect::<String>())
            .join("/");
        write!(f, "{repr}")
    }
}

impl Tetromino {
    /// The spawn orientation of this piece kind.
    pub fn shape(&self) -> Shape {
        self.template()
            .parse::<Shape>()
            .unwrap_or_else(|e| unreachable!("template for {:?} is malformed: {e}", self))
    }
}
