pub(crate) mod indexing;
pub(crate) mod pretty;

use super::prelude::*;

/// A rectangle of locked blocks, stored row-major.
///
/// Pieces only ever read a board through `Grid`; locking a piece in produces a new board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<char>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl Board {
    /// An empty board of the given extents.
    pub fn new(rows: usize, columns: usize) -> Board {
        Board { rows, columns, cells: vec![EMPTY; rows * columns] }
    }

    /// An empty board, refusing extents that are zero or past `MAX_BOARD_EXTENT`.
    pub fn with_extents(rows: usize, columns: usize) -> Result<Board> {
        if rows == 0 || columns == 0 {
            return Err(anyhow!("a board needs at least one row and one column"));
        }
        if rows > MAX_BOARD_EXTENT || columns > MAX_BOARD_EXTENT {
            return Err(anyhow!(
                "board of {rows}x{columns} exceeds the {MAX_BOARD_EXTENT}x{MAX_BOARD_EXTENT} limit"
            ));
        }
        Ok(Board::new(rows, columns))
    }

    /// Builds a board from its rows. Fails on ragged rows.
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Board> {
        let columns = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(anyhow!("row {r} has {} cells, expected {columns}", row.len()));
            }
            cells.extend_from_slice(row);
        }
        Ok(Board { rows: rows.len(), columns, cells })
    }

    /// Number of cells holding a block.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Produces the board with the piece's blocks locked in.
    ///
    /// The piece must fit, and every block must be on the board; a piece that locks while
    /// still poking out above the top cannot be stored.
    pub fn with_piece<S: RotatableGrid + Clone>(&self, piece: &MovablePiece<S>) -> Result<Board> {
        if piece.outside_board(self) {
            return Err(anyhow!("piece at {} is outside the board", piece.offset()));
        }
        if piece.overlaps(self) {
            return Err(anyhow!("piece at {} overlaps locked blocks", piece.offset()));
        }

        let mut board = self.clone();
        for outer in piece.blocks_on_board() {
            if outer.row < 0 {
                return Err(anyhow!("piece at {} has a block above the board at {outer}", piece.offset()));
            }
            let index = board.index(&outer);
            board.cells[index] = piece.cell_at_outer(&outer);
        }
        Ok(board)
    }
}

impl std::str::FromStr for Board {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rows = parse_rows(s)?;
        Board::from_rows(&rows).with_context(|| format!("could not build a board from {s}"))
    }
}
