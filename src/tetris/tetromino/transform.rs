use crate::tetris::prelude::*;

/// A quarter turn of a shape around the origin of its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Gets both rotations in canonical order.
    pub fn all() -> [Rotation; 2] {
        [Rotation::Clockwise, Rotation::CounterClockwise]
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Rotation {
        match self {
            Rotation::Clockwise        => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Extents of the rotated grid, given the extents of the source. Any quarter turn swaps them.
    pub fn extents(&self, rows: usize, columns: usize) -> (usize, usize) {
        (columns, rows)
    }

    /// The point of a `rows x columns` source grid whose cell ends up at `target` after
    /// the rotation. `target` is in the rotated grid's coordinates.
    ///
    /// clockwise:         result(r, c) = source(rows - 1 - c, r)
    /// counter-clockwise: result(r, c) = source(c, columns - 1 - r)
    pub fn source_of(&self, target: &Point, rows: usize, columns: usize) -> Point {
        let Point { row: r, col: c } = *target;
        match self {
            Rotation::Clockwise        => Point::new(rows as i32 - 1 - c, r),
            Rotation::CounterClockwise => Point::new(c, columns as i32 - 1 - r),
        }
    }
}

impl std::str::FromStr for Rotation {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cw" | "CW"   => Ok(Rotation::Clockwise),
            "ccw" | "CCW" => Ok(Rotation::CounterClockwise),
            _             => Err(anyhow!("invalid notation {s} for Rotation"))
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rotation::Clockwise        => write!(f, "cw"),
            Rotation::CounterClockwise => write!(f, "ccw"),
        }
    }
}
