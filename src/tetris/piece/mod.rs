use super::prelude::*;

/// A shape placed on a board.
///
/// Two coordinate spaces meet here:
/// - outer: a point on the board
/// - inner: a point in the wrapped shape
///
/// The offset is the outer point that inner `(0, 0)` maps to. Moving touches only the
/// offset, rotating touches only the shape, and every operation hands back a new piece.
/// Nothing bounds the offset; a piece may sit anywhere so that a candidate position can be
/// tested before the caller commits to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MovablePiece<S = Shape> {
    offset: Point,
    inner: S,
}

impl<S: RotatableGrid + Clone> MovablePiece<S> {
    /// Places the shape with its origin at the board's origin.
    pub fn new(inner: S) -> MovablePiece<S> {
        MovablePiece::at(Point::default(), inner)
    }

    /// Places the shape with its origin at the given outer point.
    pub fn at(offset: Point, inner: S) -> MovablePiece<S> {
        MovablePiece { offset, inner }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The shape in its current orientation.
    pub fn shape(&self) -> &S {
        &self.inner
    }

    pub fn move_to(&self, offset: Point) -> MovablePiece<S> {
        MovablePiece::at(offset, self.inner.clone())
    }

    pub fn move_down(&self) -> MovablePiece<S> {
        self.move_to(self.offset.move_down())
    }

    pub fn move_left(&self) -> MovablePiece<S> {
        self.move_to(self.offset.move_left())
    }

    pub fn move_right(&self) -> MovablePiece<S> {
        self.move_to(self.offset.move_right())
    }

    /// Whether any block hangs past the bottom, left or right edge of the board.
    ///
    /// The top edge is deliberately open: blocks with a negative row belong to a piece that
    /// has not fully entered the board yet.
    pub fn outside_board<G: Grid + ?Sized>(&self, board: &G) -> bool {
        all_non_empty_points_of(&self.inner).any(|inner| self.outside_board_at(&inner, board))
    }

    fn outside_board_at<G: Grid + ?Sized>(&self, inner: &Point, board: &G) -> bool {
        let outer = self.as_outer(inner);
        outer.row as i64 >= board.rows() as i64
            || outer.col < 0
            || outer.col as i64 >= board.columns() as i64
    }

    /// Whether any block lands on an occupied cell of the board. Blocks off the board,
    /// above it included, never overlap anything.
    pub fn overlaps<G: Grid + ?Sized>(&self, board: &G) -> bool {
        self.blocks_on_board()
            .iter()
            .any(|outer| board.contains(outer) && !board.is_empty_at(outer))
    }

    /// Whether the piece may legally occupy its current position on the board.
    pub fn fits<G: Grid + ?Sized>(&self, board: &G) -> bool {
        !self.outside_board(board) && !self.overlaps(board)
    }

    /// Whether the piece has a block at the given outer point.
    pub fn is_at(&self, outer: &Point) -> bool {
        let inner = self.as_inner(outer);
        self.inner.contains(&inner) && !self.inner.is_empty_at(&inner)
    }

    /// The marker at an outer point. Panics when the point falls outside the shape's
    /// bounding box, same as `cell_at`.
    pub fn cell_at_outer(&self, outer: &Point) -> char {
        self.inner.cell_at(&self.as_inner(outer))
    }

    /// Outer points of every block, in the shape's row-major order.
    pub fn blocks_on_board(&self) -> Vec<Point> {
        all_non_empty_points_of(&self.inner)
            .map(|inner| self.as_outer(&inner))
            .collect()
    }

    pub fn as_inner(&self, outer: &Point) -> Point {
        outer - self.offset
    }

    pub fn as_outer(&self, inner: &Point) -> Point {
        inner + self.offset
    }
}

impl<S: RotatableGrid + Clone> Grid for MovablePiece<S> {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    /// Lookup by inner point.
    fn cell_at(&self, inner: &Point) -> char {
        self.inner.cell_at(inner)
    }
}

impl<S: RotatableGrid + Clone> RotatableGrid for MovablePiece<S> {
    /// Turns the shape around its own origin; the offset stays put, so the piece pivots on
    /// the top-left of its bounding box and no wall kick is attempted.
    fn rotate_clockwise(&self) -> MovablePiece<S> {
        MovablePiece::at(self.offset, self.inner.rotate_clockwise())
    }

    fn rotate_counter_clockwise(&self) -> MovablePiece<S> {
        MovablePiece::at(self.offset, self.inner.rotate_counter_clockwise())
    }
}

impl From<Tetromino> for MovablePiece {
    fn from(kind: Tetromino) -> Self {
        MovablePiece::new(kind.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn square() -> MovablePiece {
        MovablePiece::new("AA/AA".parse::<Shape>().unwrap())
    }

    fn board() -> Board {
        Board::new(10, 5)
    }

    #[test]
    fn square_at_origin() {
        let piece = square();
        assert!(!piece.outside_board(&board()));
        assert_eq!(
            piece.blocks_on_board(),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn square_past_the_bottom_right() {
        let piece = square().move_to(Point::new(9, 4));
        assert!(piece.is_at(&Point::new(10, 4)));
        assert!(piece.outside_board(&board()));
    }

    #[test]
    fn square_past_the_left_edge() {
        let piece = square().move_to(Point::new(0, -1));
        assert!(piece.outside_board(&board()));
    }

    #[test]
    fn above_the_board_is_in_bounds() {
        let piece = square().move_to(Point::new(-1, 2));
        assert!(!piece.outside_board(&board()));
        assert!(piece.is_at(&Point::new(-1, 2)));
        let far = square().move_to(Point::new(-50, 0));
        assert!(!far.outside_board(&board()));
    }

    #[test]
    fn empty_cells_may_hang_off_the_board() {
        // the empty corners of a T may sit past the edge without penalty
        let t = MovablePiece::new(Tetromino::T.shape()).move_to(Point::new(8, -1));
        assert!(t.outside_board(&board()));
        // T./TT/T.
        let t = MovablePiece::new(Tetromino::T.shape()).rotate_clockwise().move_to(Point::new(0, 4));
        assert!(t.outside_board(&board()));
        // .T/TT/.T
        let t = MovablePiece::new(Tetromino::T.shape()).rotate_counter_clockwise().move_to(Point::new(0, -1));
        assert!(t.outside_board(&board()));
        let shape = ".A/.A".parse::<Shape>().unwrap();
        let bar = MovablePiece::at(Point::new(0, -1), shape);
        assert!(!bar.outside_board(&board()));
    }

    #[test]
    fn coordinate_translation_is_a_bijection() {
        for offset in [Point::new(0, 0), Point::new(9, 4), Point::new(-3, 7), Point::new(2, -5)] {
            let piece = square().move_to(offset);
            for (row, col) in iproduct!(-12..12, -12..12) {
                let p = Point::new(row, col);
                assert_eq!(piece.as_outer(&piece.as_inner(&p)), p);
                assert_eq!(piece.as_inner(&piece.as_outer(&p)), p);
            }
            assert_eq!(piece.as_outer(&Point::default()), offset);
        }
    }

    #[test]
    fn is_at_agrees_with_blocks_on_board() {
        for kind in Tetromino::all() {
            let piece = MovablePiece::new(kind.shape()).rotate_clockwise().move_to(Point::new(3, 1));
            let blocks = piece.blocks_on_board();
            for (row, col) in iproduct!(-2..10, -2..10) {
                let p = Point::new(row, col);
                assert_eq!(piece.is_at(&p), blocks.contains(&p), "{kind:?} at {p}");
            }
        }
    }

    #[test]
    fn moving_left_never_repairs_the_right_or_bottom() {
        let b = board();
        let mut piece = square().move_to(Point::new(0, 3));
        let mut seen_outside = false;
        for _ in 0..6 {
            let outside = piece.outside_board(&b);
            assert!(outside || !seen_outside, "left edge violation went away at {}", piece.offset());
            seen_outside |= outside;
            piece = piece.move_left();
        }
        assert!(seen_outside);

        let mut piece = square().move_to(Point::new(9, 2));
        for _ in 0..4 {
            assert!(piece.outside_board(&b));
            piece = piece.move_left();
        }
    }

    #[test]
    fn moves_leave_the_original_alone() {
        let piece = square().move_to(Point::new(4, 2));
        assert_eq!(piece.move_down().offset(), Point::new(5, 2));
        assert_eq!(piece.move_left().offset(), Point::new(4, 1));
        assert_eq!(piece.move_right().offset(), Point::new(4, 3));
        assert_eq!(piece.offset(), Point::new(4, 2));
        assert_eq!(piece.move_down().shape(), piece.shape());

        let spawned: MovablePiece = Tetromino::L.into();
        assert_eq!(spawned.offset(), Point::default());
        assert_eq!(*spawned.shape(), Tetromino::L.shape());
    }

    #[test]
    fn rotation_keeps_the_offset() {
        let piece = MovablePiece::new(Tetromino::I.shape()).move_to(Point::new(2, 1));
        let cw = piece.rotate_clockwise();
        assert_eq!(cw.offset(), Point::new(2, 1));
        assert_eq!((cw.rows(), cw.columns()), (4, 1));
        assert_eq!(
            cw.blocks_on_board(),
            vec![Point::new(2, 1), Point::new(3, 1), Point::new(4, 1), Point::new(5, 1)]
        );
        assert_eq!(cw.rotate_counter_clockwise(), piece);
        assert_eq!(piece.rotate(Rotation::Clockwise), cw);
    }

    #[test]
    fn lookups_by_inner_and_outer() {
        let piece = MovablePiece::new(Tetromino::T.shape()).move_to(Point::new(5, 2));
        assert_eq!(piece.cell_at(&Point::new(0, 1)), 'T');
        assert_eq!(piece.cell_at_outer(&Point::new(5, 3)), 'T');
        assert_eq!(piece.cell_at_outer(&Point::new(5, 2)), EMPTY);
        assert!(!piece.is_at(&Point::new(5, 2)));
        assert!(!piece.is_at(&Point::new(4, 3)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn outer_lookup_past_the_shape_panics() {
        square().move_to(Point::new(1, 1)).cell_at_outer(&Point::new(0, 0));
    }

    #[test]
    fn overlap_against_locked_cells() {
        let locked = "...../...../...../..X..".parse::<Board>().unwrap();
        let piece = square().move_to(Point::new(0, 1));
        assert!(!piece.overlaps(&locked));
        assert!(piece.fits(&locked));
        let lower = piece.move_down();
        assert!(!lower.overlaps(&locked));
        let lowest = lower.move_down();
        assert!(lowest.overlaps(&locked));
        assert!(!lowest.outside_board(&locked));
        assert!(!lowest.fits(&locked));
        assert!(!square().move_to(Point::new(-1, 2)).overlaps(&locked));
    }
}
