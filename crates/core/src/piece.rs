//! Piece module - the active falling tetromino

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shapes::{self, mask_to_board, Mask};
use crate::types::{Coord, PieceKind, Rgb, MASK_SIZE};

/// Cells a tetromino occupies on the board.
pub type PieceCells = ArrayVec<Coord, 4>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Index into the kind's rotation states; kept reduced modulo the state count.
    pub rotation: usize,
}

impl Piece {
    /// Create a piece in its spawn rotation at `anchor`
    pub fn spawn(kind: PieceKind, anchor: Coord) -> Self {
        Self {
            kind,
            x: anchor.x,
            y: anchor.y,
            rotation: 0,
        }
    }

    pub fn anchor(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn color(&self) -> Rgb {
        shapes::color(self.kind)
    }

    pub fn mask(&self) -> Mask {
        shapes::mask(self.kind, self.rotation)
    }

    pub fn state_count(&self) -> usize {
        shapes::state_count(self.kind)
    }

    /// Board coordinate of each occupied mask cell, in mask order.
    ///
    /// A cell beyond the `i8` coordinate range yields None.
    pub fn board_cells(&self) -> impl Iterator<Item = Option<Coord>> {
        let anchor = self.anchor();
        let mask = self.mask();
        (0..MASK_SIZE)
            .flat_map(move |row| (0..MASK_SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| mask.is_set(row, col))
            .map(move |(row, col)| mask_to_board(anchor, row, col))
    }

    /// Board coordinates of every occupied cell, buffer rows included.
    /// Cells beyond the `i8` coordinate range are left out.
    pub fn cells(&self) -> PieceCells {
        self.board_cells().flatten().collect()
    }

    /// The piece moved by (dx, dy), or None if the anchor would leave the
    /// `i8` range.
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Piece> {
        let anchor = self.anchor().offset(dx, dy)?;
        Some(Piece {
            x: anchor.x,
            y: anchor.y,
            ..*self
        })
    }

    /// Occupied cells on visible rows only
    pub fn visible_cells(&self) -> PieceCells {
        self.cells().into_iter().filter(Coord::is_visible).collect()
    }

    /// Lowest occupied row (largest y)
    pub fn bottom_row(&self) -> i8 {
        self.cells().iter().map(|c| c.y).max().unwrap_or(self.y)
    }

    /// Check the piece against walls, floor and the cells on `board`
    pub fn is_valid(&self, board: &Board) -> bool {
        crate::board::is_valid(self, board)
    }
}
