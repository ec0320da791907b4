//! Lock events - what happened the last time a piece locked
//!
//! The session records one event per lock and keeps only the most recent;
//! observers (the shell's event log, tests) take it with
//! [`Session::take_last_event`](crate::Session::take_last_event).

use crate::lock::ClearedRows;
use crate::piece::PieceCells;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked.
    pub kind: PieceKind,
    /// Cells merged into the locked set (visible rows only).
    pub cells: PieceCells,
    /// Rows removed by the clear that followed, bottom to top.
    pub cleared_rows: ClearedRows,
    /// Points awarded for the clear.
    pub score_delta: u32,
    /// Running score after the clear.
    pub score: u32,
}

impl LockEvent {
    pub fn rows_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}
