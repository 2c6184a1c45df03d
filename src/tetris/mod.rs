/*
 *  Falling-block pieces: shapes, rotation, and placement against a board.
 */

pub mod board;
pub mod consts;
pub mod coords;
pub mod grid;
pub mod notation;
pub mod piece;
pub mod tetromino;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::Board,
        consts::*,
        coords::{self, *},
        grid::{all_non_empty_points_of, all_points_of, Grid, RotatableGrid},
        notation::parse_rows,
        piece::MovablePiece,
        tetromino::{Rotation, Shape},
    };
}
