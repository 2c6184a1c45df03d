use crate::tetris::prelude::*;

/// A row/column pair. Whether it is an outer (board) or inner (shape) coordinate
/// is up to the caller; nothing here tags it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

/// One row towards the bottom of the board.
pub static DOWN: Point = Point { row: 1, col: 0 };

/// One column towards the left edge.
pub static LEFT: Point = Point { row: 0, col: -1 };

/// One column towards the right edge.
pub static RIGHT: Point = Point { row: 0, col: 1 };

impl Point {
    /// Constructs a new point.
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    pub fn move_down(&self) -> Point {
        self + DOWN
    }

    pub fn move_left(&self) -> Point {
        self + LEFT
    }

    pub fn move_right(&self) -> Point {
        self + RIGHT
    }

    /// Whether the point lies in the `[0, rows) x [0, columns)` rectangle.
    pub fn within(&self, rows: usize, columns: usize) -> bool {
        0 <= self.row && (self.row as i64) < rows as i64 && 0 <= self.col && (self.col as i64) < columns as i64
    }
}

impl std::str::FromStr for Point {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((row, col)) = s.split_once(',') else {
            return Err(anyhow!("expected a point of the form row,col; received {s}"));
        };
        let row = row.trim().parse::<i32>().with_context(|| format!("bad row in point {s}"))?;
        let col = col.trim().parse::<i32>().with_context(|| format!("bad column in point {s}"))?;
        Ok(Point { row, col })
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// P + P

impl Add<&Point> for &Point {
    type Output = Point;
    fn add(self, rhs: &Point) -> Self::Output {
        Point {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}

impl Add<Point> for &Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Self::Output {
        self + &rhs
    }
}

impl Add<&Point> for Point {
    type Output = Point;
    fn add(self, rhs: &Point) -> Self::Output {
        &self + rhs
    }
}

impl Add<Point> for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Self::Output {
        &self + &rhs
    }
}

// P - P

impl Sub<&Point> for &Point {
    type Output = Point;
    fn sub(self, rhs: &Point) -> Self::Output {
        Point {
            row: self.row - rhs.row,
            col: self.col - rhs.col,
        }
    }
}

impl Sub<Point> for &Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Self::Output {
        self - &rhs
    }
}

impl Sub<&Point> for Point {
    type Output = Point;
    fn sub(self, rhs: &Point) -> Self::Output {
        &self - rhs
    }
}

impl Sub<Point> for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Self::Output {
        &self - &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn unit_moves() {
        let p = Point::new(3, 4);
        assert_eq!(p.move_down(), Point::new(4, 4));
        assert_eq!(p.move_left(), Point::new(3, 3));
        assert_eq!(p.move_right(), Point::new(3, 5));
        assert_eq!(p, Point::new(3, 4));
    }

    #[test]
    fn add_and_sub_are_inverse() {
        let p = Point::new(-2, 7);
        let q = Point::new(5, -1);
        assert_eq!(p + q, Point::new(3, 6));
        assert_eq!((p + q) - q, p);
        assert_eq!(&p - &p, Point::default());
    }

    #[test]
    fn within_rejects_negatives_and_far_edges() {
        assert!(Point::new(0, 0).within(2, 3));
        assert!(Point::new(1, 2).within(2, 3));
        assert!(!Point::new(2, 0).within(2, 3));
        assert!(!Point::new(0, 3).within(2, 3));
        assert!(!Point::new(-1, 0).within(2, 3));
        assert!(!Point::new(0, -1).within(2, 3));
    }

    #[test]
    fn parse_and_display() {
        let p = " -1, 4".parse::<Point>().unwrap();
        assert_eq!(p, Point::new(-1, 4));
        assert_eq!(p.to_string(), "(-1, 4)");
        assert!("14".parse::<Point>().is_err());
        assert!("a,4".parse::<Point>().is_err());
    }
}
