mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::{SessionConfig, SessionOptions};

use crate::prelude::*;

/// A line-oriented game driver: one board, at most one falling piece.
///
/// Every command that moves the piece builds a candidate, checks it against the board,
/// and either commits it or leaves the current piece as it was.
pub struct Session<W: Write> {
    board: Option<Board>,
    piece: Option<MovablePiece>,
    config: SessionConfig,
    out: W,
    locked: usize,
}

impl<W: Write> Session<W> {
    /// Produces a new session that answers on the given writer.
    pub fn new(config: SessionConfig, out: W) -> Session<W> {
        Session {
            board: None,
            piece: None,
            config,
            out,
            locked: 0,
        }
    }

    /// Reads commands until `quit` or the end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            if cmd == "quit" {
                log::info!("quit after {} locked pieces", self.locked);
                return Ok(());
            }
            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
        log::info!("input closed after {} locked pieces", self.locked);
        Ok(())
    }

    /// Runs a command. Only a failure to write the response is an error here; command
    /// failures are reported on the stream.
    pub fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "blocks" => self.blocks(),
            | "ccw" => self.rotate(Rotation::CounterClockwise),
            | "cw" => self.rotate(Rotation::Clockwise),
            | "down" => self.down().map(|_| ()),
            | "drop" => self.drop(),
            | "info" => self.info(),
            | "left" => self.shift("left", |p| p.move_left()),
            | "moveto" => self.move_to(args),
            | "newgame" => self.new_game(args),
            | "right" => self.shift("right", |p| p.move_right()),
            | "show" => self.show(),
            | "spawn" => self.spawn(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result {
            Ok(_) => {
                log::debug!("command completed: {cmd} {}", args.join(" "));
                self.ok()
            }
            Err(err) => {
                log::warn!("command {cmd} failed: {err}");
                self.err(&err)
            }
        }
    }

    /// Starts a new game on an empty board, optionally with its own extents.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let (rows, columns) = match args {
            [] => (self.config.rows, self.config.columns),
            [rows, columns] => (rows.parse::<usize>()?, columns.parse::<usize>()?),
            _ => return Err(anyhow!("usage: newgame [rows columns]")),
        };

        self.board = Some(Board::with_extents(rows, columns)?);
        self.piece = None;
        self.locked = 0;
        log::info!("new game on a {rows}x{columns} board");
        self.show_if_verbose()
    }

    /// Puts a new piece on the top row.
    fn spawn(&mut self, args: &[&str]) -> Result<()> {
        let board = self.ensure_started()?;
        if self.piece.is_some() {
            return Err(anyhow!("a piece is already falling"));
        }

        let kind = args.first().ok_or_else(|| anyhow!("no piece kind provided"))?.parse::<Tetromino>()?;
        let shape = kind.shape();
        let col = match args.get(1) {
            Some(col) => col.parse::<i32>()?,
            None => self.config.spawn_col.unwrap_or_else(|| {
                (board.columns() as i32 - shape.columns() as i32) / 2
            }),
        };

        let piece = MovablePiece::at(check_offset(Point::new(0, col))?, shape);
        if !piece.fits(board) {
            return Err(anyhow!("no room to spawn {kind} at column {col}"));
        }
        log::debug!("spawned {kind} at {}", piece.offset());
        self.piece = Some(piece);
        self.show_if_verbose()
    }

    /// Commits a sideways move if the board allows it.
    fn shift(&mut self, name: &str, step: impl Fn(&MovablePiece) -> MovablePiece) -> Result<()> {
        let (board, piece) = self.ensure_piece()?;
        let candidate = step(piece);
        if !candidate.fits(board) {
            return Err(anyhow!("{name} is blocked at {}", piece.offset()));
        }
        self.piece = Some(candidate);
        self.show_if_verbose()
    }

    /// Rotates in place; no kick is tried when the rotated piece does not fit.
    fn rotate(&mut self, rotation: Rotation) -> Result<()> {
        let (board, piece) = self.ensure_piece()?;
        let candidate = piece.rotate(rotation);
        if !candidate.fits(board) {
            return Err(anyhow!("{rotation} rotation is blocked at {}", piece.offset()));
        }
        self.piece = Some(candidate);
        self.show_if_verbose()
    }

    /// Moves the piece straight to an offset, given as `row col` or `row,col`.
    fn move_to(&mut self, args: &[&str]) -> Result<()> {
        let offset = check_offset(args.join(",").parse::<Point>()?)?;
        let (board, piece) = self.ensure_piece()?;
        let candidate = piece.move_to(offset);
        if !candidate.fits(board) {
            return Err(anyhow!("offset {offset} is not free"));
        }
        self.piece = Some(candidate);
        self.show_if_verbose()
    }

    /// Moves one row down, locking the piece when it cannot. Returns whether it locked.
    fn down(&mut self) -> Result<bool> {
        let (board, piece) = self.ensure_piece()?;
        let candidate = piece.move_down();
        if candidate.fits(board) {
            self.piece = Some(candidate);
            self.show_if_verbose()?;
            return Ok(false);
        }
        self.lock()?;
        Ok(true)
    }

    /// Moves down until the piece locks.
    fn drop(&mut self) -> Result<()> {
        self.ensure_piece()?;
        while !self.down()? {}
        Ok(())
    }

    fn lock(&mut self) -> Result<()> {
        let (board, piece) = self.ensure_piece()?;
        let board = board.with_piece(piece).context("could not lock the piece")?;
        self.board = Some(board);
        self.piece = None;
        self.locked += 1;
        log::debug!("locked piece #{}", self.locked);
        writeln!(self.out, "locked")?;
        self.show_if_verbose()
    }

    /// Prints the board with the falling piece drawn in.
    fn show(&mut self) -> Result<()> {
        let board = self.ensure_started()?;
        let repr = match &self.piece {
            Some(piece) => board.pretty_with(piece),
            None => board.pretty(),
        };
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    /// Prints the outer points of the falling piece's blocks.
    fn blocks(&mut self) -> Result<()> {
        let (_, piece) = self.ensure_piece()?;
        let repr = piece.blocks_on_board().iter().map(|p| format!("{},{}", p.row, p.col)).join(" ");
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    // accessors

    fn ensure_started(&self) -> Result<&Board> {
        self.board.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    fn ensure_piece(&self) -> Result<(&Board, &MovablePiece)> {
        let board = self.ensure_started()?;
        let piece = self.piece.as_ref().ok_or_else(|| anyhow!("no piece is falling"))?;
        Ok((board, piece))
    }

    // basic printers

    fn show_if_verbose(&mut self) -> Result<()> {
        if self.config.verbose {
            self.show()?;
        }
        Ok(())
    }

    /// Prints the session's ID.
    fn info(&mut self) -> Result<()> {
        writeln!(self.out, "id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }

    /// Prints an error to the stream.
    fn err(&mut self, err: &Error) -> Result<()> {
        writeln!(self.out, "err\n{err:#}")?;
        self.ok()
    }

    /// Prints the ok footer to the stream.
    fn ok(&mut self) -> Result<()> {
        writeln!(self.out, "ok")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Refuses offsets so far off the board that translating through them could overflow.
fn check_offset(offset: Point) -> Result<Point> {
    let limit = MAX_OFFSET as u32;
    if offset.row.unsigned_abs() > limit || offset.col.unsigned_abs() > limit {
        return Err(anyhow!("offset {offset} is too far from the board"));
    }
    Ok(offset)
}
