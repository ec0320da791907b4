//! Lock & clear - merging a piece into the locked cells and removing full rows

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::locked::LockedCells;
use crate::piece::{Piece, PieceCells};
use crate::types::{Coord, BOARD_HEIGHT, BOARD_WIDTH};

/// Rows removed by one clear, bottom to top.
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Merge the piece's visible cells into `locked` with the piece's color.
///
/// Cells still in the buffer are dropped. Returns the cells that were locked.
pub fn lock_piece(piece: &Piece, locked: &mut LockedCells) -> PieceCells {
    let color = piece.color();
    let cells = piece.visible_cells();
    for &c in &cells {
        locked.insert(c, color);
    }
    cells
}

/// Remove every full row of `board` from `locked` and let the rows above fall.
///
/// A row is full when none of its cells on `board` are empty. Each surviving
/// cell moves down by the number of cleared rows strictly below it. The moved
/// cells are written into a fresh map, so the result does not depend on the
/// order cells are visited in. With no full rows `locked` is left untouched.
///
/// Returns the cleared row indices, bottom to top; the count is its length.
pub fn clear_rows(board: &Board, locked: &mut LockedCells) -> ClearedRows {
    let mut cleared = ClearedRows::new();

    for y in (0..BOARD_HEIGHT as usize).rev() {
        if board.is_row_full(y) {
            let row = y as i8;
            cleared.push(row);
            for x in 0..BOARD_WIDTH as i8 {
                locked.remove(Coord::new(x, row));
            }
        }
    }

    if cleared.is_empty() {
        return cleared;
    }

    let mut compacted = BTreeMap::new();
    for (coord, color) in locked.iter() {
        let shift = cleared.iter().filter(|&&row| row > coord.y).count() as i8;
        // Only cells above a cleared row move, so the shift stays on the board.
        if let Some(moved) = coord.offset(0, shift) {
            compacted.insert(moved, color);
        }
    }
    locked.replace(compacted);

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rgb};

    const GRAY: Rgb = Rgb::new(128, 128, 128);
    const MARK: Rgb = Rgb::new(1, 2, 3);

    fn fill_row(locked: &mut LockedCells, y: i8) {
        for x in 0..10 {
            locked.insert(Coord::new(x, y), GRAY);
        }
    }

    fn clear(locked: &mut LockedCells) -> ClearedRows {
        let board = Board::from_locked(locked);
        clear_rows(&board, locked)
    }

    #[test]
    fn test_lock_piece_drops_buffer_cells() {
        let mut locked = LockedCells::new();
        // Vertical I from row -2 to row 1.
        let piece = Piece::spawn(PieceKind::I, Coord::new(3, 2));
        let cells = lock_piece(&piece, &mut locked);

        assert_eq!(cells.len(), 2);
        assert_eq!(locked.len(), 2);
        assert_eq!(locked.get(Coord::new(3, 0)), Some(piece.color()));
        assert_eq!(locked.get(Coord::new(3, 1)), Some(piece.color()));
        assert!(!locked.contains(Coord::new(3, -1)));
    }

    #[test]
    fn test_clear_no_full_rows_is_noop() {
        let mut locked = LockedCells::new();
        for x in 0..9 {
            locked.insert(Coord::new(x, 19), GRAY);
        }
        locked.insert(Coord::new(4, 12), MARK);
        let before = locked.clone();

        let cleared = clear(&mut locked);
        assert!(cleared.is_empty());
        assert_eq!(locked, before);
    }

    #[test]
    fn test_clear_single_row_shifts_above() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19);
        locked.insert(Coord::new(0, 18), MARK);
        locked.insert(Coord::new(5, 10), MARK);

        let cleared = clear(&mut locked);
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(locked.len(), 2);
        assert_eq!(locked.get(Coord::new(0, 19)), Some(MARK));
        assert_eq!(locked.get(Coord::new(5, 11)), Some(MARK));
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 5);
        fill_row(&mut locked, 10);
        fill_row(&mut locked, 15);

        locked.insert(Coord::new(0, 4), MARK); // above 3 cleared rows
        locked.insert(Coord::new(1, 9), MARK); // above 2
        locked.insert(Coord::new(2, 14), MARK); // above 1
        locked.insert(Coord::new(3, 17), MARK); // above none

        let cleared = clear(&mut locked);
        assert_eq!(cleared.as_slice(), &[15, 10, 5]);

        assert_eq!(locked.len(), 4);
        assert_eq!(locked.get(Coord::new(0, 7)), Some(MARK));
        assert_eq!(locked.get(Coord::new(1, 11)), Some(MARK));
        assert_eq!(locked.get(Coord::new(2, 15)), Some(MARK));
        assert_eq!(locked.get(Coord::new(3, 17)), Some(MARK));
    }

    #[test]
    fn test_clear_does_not_corrupt_stacked_columns() {
        // A full column above the cleared row: in-place shifting would
        // overwrite cells before they were read.
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19);
        for y in 12..19 {
            locked.insert(Coord::new(4, y), Rgb::new(y as u8, 0, 0));
        }

        clear(&mut locked);

        assert_eq!(locked.len(), 7);
        for y in 12..19 {
            assert_eq!(locked.get(Coord::new(4, y + 1)), Some(Rgb::new(y as u8, 0, 0)));
        }
    }

    #[test]
    fn test_clear_four_rows() {
        let mut locked = LockedCells::new();
        for y in 16..20 {
            fill_row(&mut locked, y);
        }
        let cleared = clear(&mut locked);
        assert_eq!(cleared.len(), 4);
        assert!(locked.is_empty());
    }

    #[test]
    fn test_clear_shifts_buffer_cells_too() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19);
        locked.insert(Coord::new(7, -1), MARK);

        clear(&mut locked);
        assert_eq!(locked.get(Coord::new(7, 0)), Some(MARK));
    }
}
