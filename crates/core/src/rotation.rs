//! Rotation - clockwise rotation with a uniform sideways kick
//!
//! Every kind uses the same policy: try the next rotation state in place,
//! then one column right, then one column left of the start. No vertical
//! kicks and no per-kind kick tables. If nothing fits, the piece is left
//! exactly as it was.

use crate::board::Board;
use crate::piece::Piece;

/// Horizontal steps tried in turn after an in-place rotation fails.
///
/// Steps accumulate: +1, then -2 from there, i.e. one column left of the start.
pub const KICK_STEPS: [i8; 2] = [1, -2];

/// What a rotation attempt did to the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// Rotated without moving.
    Rotated,
    /// Rotated after shifting by this many columns.
    Kicked(i8),
    /// Nothing fit; position and rotation are unchanged.
    Reverted,
}

impl RotateOutcome {
    pub fn succeeded(self) -> bool {
        !matches!(self, RotateOutcome::Reverted)
    }
}

/// Advance the piece one rotation state clockwise, kicking if needed.
pub fn rotate_cw(piece: &mut Piece, board: &Board) -> RotateOutcome {
    let before = *piece;
    piece.rotation = (piece.rotation + 1) % piece.state_count();

    if piece.is_valid(board) {
        return RotateOutcome::Rotated;
    }

    for step in KICK_STEPS {
        let Some(kicked) = piece.shifted(step, 0) else {
            break;
        };
        *piece = kicked;
        if piece.is_valid(board) {
            return RotateOutcome::Kicked(piece.x - before.x);
        }
    }

    *piece = before;
    RotateOutcome::Reverted
}
