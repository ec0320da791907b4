//! Snapshot module - render-ready view of a session after each tick

use crate::board::Grid;
use crate::piece::{Piece, PieceCells};
use crate::shapes::Mask;
use crate::types::{PieceKind, Rgb};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
    /// All occupied cells, buffer rows included.
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color(),
            cells: value.cells(),
        }
    }
}

/// The queued piece, as shown in the preview box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub mask: Mask,
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            mask: value.mask(),
        }
    }
}

/// Everything a renderer needs after one tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Locked cells with the active piece painted on top, visible rows only.
    pub grid: Grid,
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub score: u32,
    pub game_over: bool,
    pub quit: bool,
}

impl Snapshot {
    /// Number of filled cells on the grid
    pub fn filled(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.quit
    }
}
