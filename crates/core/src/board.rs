//! Board module - the visible grid and placement validation
//!
//! The board is a 10x20 grid where each cell is empty or holds a color.
//! It is never the durable game state: it is rebuilt from the
//! [`LockedCells`] every tick and thrown away afterwards.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use crate::locked::LockedCells;
use crate::piece::Piece;
use crate::types::{Cell, Coord, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major 2D view of the board, as handed to renderers
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build the board from the locked cells. Buffer rows are skipped.
    pub fn from_locked(locked: &LockedCells) -> Self {
        let mut board = Self::new();
        for (coord, color) in locked.iter() {
            if coord.is_visible() {
                board.set(coord.x, coord.y, Some(color));
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single piece cell may sit at `coord`.
    ///
    /// Walls and floor always apply. Buffer rows (y < 0) have nothing to
    /// collide with, so only the column check applies there.
    pub fn accepts(&self, coord: Coord) -> bool {
        if !coord.in_columns() || !coord.above_floor() {
            return false;
        }
        !coord.is_visible() || !self.is_occupied(coord.x, coord.y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Paint cells with a color, for rendering. Buffer rows are skipped.
    pub fn overlay(&mut self, cells: &[Coord], color: Rgb) {
        for c in cells {
            if c.is_visible() {
                self.set(c.x, c.y, Some(color));
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D grid
    pub fn to_grid(&self) -> Grid {
        let width = BOARD_WIDTH as usize;
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Placement validator used by every move, rotation and gravity step.
///
/// Rejects the piece if any cell leaves the columns, reaches the floor, or
/// lands on an occupied visible cell. A cell past the `i8` coordinate range
/// is out of bounds.
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    piece
        .board_cells()
        .all(|cell| matches!(cell, Some(c) if board.accepts(c)))
}
