//! Loss detection

use crate::locked::LockedCells;

/// Rows above this one count as the ceiling.
pub const CEILING_ROW: i8 = 1;

/// True once any locked cell has reached the top row (or the buffer above it).
pub fn is_lost(locked: &LockedCells) -> bool {
    locked.coords().any(|c| c.y < CEILING_ROW)
}
