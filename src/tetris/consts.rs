use crate::utils::prelude::*;

/// The marker of a cell that holds no block.
pub const EMPTY: char = '.';

/// The largest extent (in either direction) of a rotatable shape.
pub const MAX_EXTENT: usize = 4;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 10;

/// The largest board, in either direction, a game can be started on.
pub const MAX_BOARD_EXTENT: usize = 1024;

/// The farthest a piece may be placed from the board origin, in either direction. Keeps
/// every translation between inner and outer points well inside `i32`.
pub const MAX_OFFSET: i32 = 1 << 20;

// A piece typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tetromino {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Tetromino {
    /// Gets the piece kinds in order.
    pub fn all() -> [Tetromino; 7] {
        [
            Tetromino::I,
            Tetromino::O,
            Tetromino::T,
            Tetromino::S,
            Tetromino::Z,
            Tetromino::J,
            Tetromino::L,
        ]
    }

    /// The marker stamped into every occupied cell of this kind.
    pub fn marker(&self) -> char {
        match self {
            Tetromino::I => 'I',
            Tetromino::O => 'O',
            Tetromino::T => 'T',
            Tetromino::S => 'S',
            Tetromino::Z => 'Z',
            Tetromino::J => 'J',
            Tetromino::L => 'L',
        }
    }

    /// The spawn orientation in notation, tightly bounded.
    pub(crate) fn template(&self) -> &'static str {
        match self {
            Tetromino::I => "IIII",
            Tetromino::O => "OO/OO",
            Tetromino::T => ".T./TTT",
            Tetromino::S => ".SS/SS.",
            Tetromino::Z => "ZZ./.ZZ",
            Tetromino::J => "J../JJJ",
            Tetromino::L => "..L/LLL",
        }
    }
}

impl std::str::FromStr for Tetromino {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "I" | "i" => Ok(Tetromino::I),
            "O" | "o" => Ok(Tetromino::O),
            "T" | "t" => Ok(Tetromino::T),
            "S" | "s" => Ok(Tetromino::S),
            "Z" | "z" => Ok(Tetromino::Z),
            "J" | "j" => Ok(Tetromino::J),
            "L" | "l" => Ok(Tetromino::L),
            _         => Err(anyhow!("invalid notation {s} for Tetromino"))
        }
    }
}

impl std::fmt::Display for Tetromino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}
