//! Shapes module - the seven tetrominoes and their rotation states
//!
//! Every rotation state is a 5x5 mask. A set cell at mask row `i`, column `j`
//! of a piece anchored at `(x, y)` occupies board cell `(x + j - 2, y + i - 4)`.
//! The vertical offset is larger than the horizontal one: a piece
//! spawned at row 0 starts almost entirely in the buffer above the playfield.
//!
//! Kinds with rotational symmetry carry fewer states (O has 1; S, Z and I
//! have 2; J, L and T have 4).

use crate::types::{Coord, PieceKind, Rgb, MASK_SIZE};

/// Mask column that lands on the anchor's column
pub const ANCHOR_COL: i8 = 2;

/// Mask row that lands on the anchor's row
pub const ANCHOR_ROW: i8 = 4;

/// A 5x5 occupancy mask, one bit-row per mask row.
///
/// The most significant of the five bits is mask column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask([u8; MASK_SIZE]);

impl Mask {
    pub const fn from_rows(rows: [u8; MASK_SIZE]) -> Self {
        Self(rows)
    }

    /// Whether mask cell (row, col) is set. Out-of-range cells are never set.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < MASK_SIZE && col < MASK_SIZE && self.0[row] & (1 << (MASK_SIZE - 1 - col)) != 0
    }

    /// Set cells as (row, col), row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..MASK_SIZE).flat_map(move |row| {
            (0..MASK_SIZE)
                .filter(move |&col| self.is_set(row, col))
                .map(move |col| (row, col))
        })
    }
}

/// Board coordinate of mask cell (row, col) for a piece anchored at `anchor`.
///
/// None when the cell falls outside the `i8` coordinate range; such a cell
/// is off the board by any measure.
#[inline]
pub fn mask_to_board(anchor: Coord, row: usize, col: usize) -> Option<Coord> {
    anchor.offset(col as i8 - ANCHOR_COL, row as i8 - ANCHOR_ROW)
}

const S_STATES: [Mask; 2] = [
    Mask::from_rows([0b00000, 0b00000, 0b00110, 0b01100, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b00110, 0b00010, 0b00000]),
];

const Z_STATES: [Mask; 2] = [
    Mask::from_rows([0b00000, 0b00000, 0b01100, 0b00110, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b01100, 0b01000, 0b00000]),
];

const I_STATES: [Mask; 2] = [
    Mask::from_rows([0b00100, 0b00100, 0b00100, 0b00100, 0b00000]),
    Mask::from_rows([0b00000, 0b11110, 0b00000, 0b00000, 0b00000]),
];

const O_STATES: [Mask; 1] = [Mask::from_rows([
    0b00000, 0b00000, 0b01100, 0b01100, 0b00000,
])];

const J_STATES: [Mask; 4] = [
    Mask::from_rows([0b00000, 0b01000, 0b01110, 0b00000, 0b00000]),
    Mask::from_rows([0b00000, 0b00110, 0b00100, 0b00100, 0b00000]),
    Mask::from_rows([0b00000, 0b00000, 0b01110, 0b00010, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b00100, 0b01100, 0b00000]),
];

const L_STATES: [Mask; 4] = [
    Mask::from_rows([0b00000, 0b00010, 0b01110, 0b00000, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b00100, 0b00110, 0b00000]),
    Mask::from_rows([0b00000, 0b00000, 0b01110, 0b01000, 0b00000]),
    Mask::from_rows([0b00000, 0b01100, 0b00100, 0b00100, 0b00000]),
];

const T_STATES: [Mask; 4] = [
    Mask::from_rows([0b00000, 0b00100, 0b01110, 0b00000, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b00110, 0b00100, 0b00000]),
    Mask::from_rows([0b00000, 0b00000, 0b01110, 0b00100, 0b00000]),
    Mask::from_rows([0b00000, 0b00100, 0b01100, 0b00100, 0b00000]),
];

/// Rotation states of a kind, in clockwise order starting from spawn.
pub fn rotation_states(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Number of distinct rotation states of a kind.
pub fn state_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Mask for a rotation index, wrapping modulo the state count.
pub fn mask(kind: PieceKind, rotation: usize) -> Mask {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Color every cell of this kind is drawn and locked with.
pub fn color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::S => Rgb::new(80, 230, 150),
        PieceKind::Z => Rgb::new(230, 90, 90),
        PieceKind::I => Rgb::new(90, 200, 255),
        PieceKind::O => Rgb::new(240, 240, 120),
        PieceKind::J => Rgb::new(100, 140, 230),
        PieceKind::L => Rgb::new(255, 170, 70),
        PieceKind::T => Rgb::new(190, 100, 220),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counts() {
        assert_eq!(state_count(PieceKind::O), 1);
        assert_eq!(state_count(PieceKind::S), 2);
        assert_eq!(state_count(PieceKind::Z), 2);
        assert_eq!(state_count(PieceKind::I), 2);
        assert_eq!(state_count(PieceKind::J), 4);
        assert_eq!(state_count(PieceKind::L), 4);
        assert_eq!(state_count(PieceKind::T), 4);
    }

    #[test]
    fn test_every_state_has_four_cells() {
        for kind in PieceKind::ALL {
            for (r, m) in rotation_states(kind).iter().enumerate() {
                assert_eq!(m.occupied().count(), 4, "{:?} rotation {}", kind, r);
            }
        }
    }

    #[test]
    fn test_mask_bit_order() {
        // I spawn state is the vertical bar in mask column 2.
        let m = mask(PieceKind::I, 0);
        for row in 0..4 {
            assert!(m.is_set(row, 2));
            assert!(!m.is_set(row, 1));
        }
        assert!(!m.is_set(4, 2));
        assert!(!m.is_set(5, 2));
        assert!(!m.is_set(0, 5));

        // I horizontal spans columns 0-3 of mask row 1.
        let m = mask(PieceKind::I, 1);
        let cells: Vec<_> = m.occupied().collect();
        assert_eq!(cells, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_mask_to_board_offsets() {
        let anchor = Coord::new(5, 0);
        assert_eq!(mask_to_board(anchor, 0, 0), Some(Coord::new(3, -4)));
        assert_eq!(mask_to_board(anchor, 4, 2), Some(Coord::new(5, 0)));
        assert_eq!(mask_to_board(anchor, 2, 4), Some(Coord::new(7, -2)));

        assert_eq!(mask_to_board(Coord::new(i8::MAX, 0), 0, 3), None);
        assert_eq!(mask_to_board(Coord::new(0, i8::MIN), 0, 2), None);
        assert_eq!(
            mask_to_board(Coord::new(i8::MAX, i8::MIN), 4, 2),
            Some(Coord::new(i8::MAX, i8::MIN))
        );
    }

    #[test]
    fn test_rotation_index_wraps() {
        assert_eq!(mask(PieceKind::T, 4), mask(PieceKind::T, 0));
        assert_eq!(mask(PieceKind::S, 3), mask(PieceKind::S, 1));
        assert_eq!(mask(PieceKind::O, 7), mask(PieceKind::O, 0));
    }

    #[test]
    fn test_colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(color(a), color(b));
                }
            }
        }
    }
}
