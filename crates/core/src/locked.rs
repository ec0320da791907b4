//! Locked cells - the durable state of the playfield
//!
//! A map from signed coordinate to color. Cells enter only when a piece
//! locks and are removed or renumbered only by a row clear. Rows may be
//! negative (buffer); columns are always within the walls.

use std::collections::BTreeMap;

use crate::types::{Coord, Rgb};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: BTreeMap<Coord, Rgb>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell. Returns false (and changes nothing) if the column is
    /// outside the walls.
    pub fn insert(&mut self, coord: Coord, color: Rgb) -> bool {
        if !coord.in_columns() {
            return false;
        }
        self.cells.insert(coord, color);
        true
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Rgb> {
        self.cells.remove(&coord)
    }

    pub fn get(&self, coord: Coord) -> Option<Rgb> {
        self.cells.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Rgb)> + '_ {
        self.cells.iter().map(|(&coord, &color)| (coord, color))
    }

    /// Coordinates in coordinate order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// Replace the whole content, used by row compaction.
    pub(crate) fn replace(&mut self, cells: BTreeMap<Coord, Rgb>) {
        self.cells = cells;
    }
}

impl FromIterator<(Coord, Rgb)> for LockedCells {
    fn from_iter<T: IntoIterator<Item = (Coord, Rgb)>>(iter: T) -> Self {
        let mut locked = Self::new();
        for (coord, color) in iter {
            locked.insert(coord, color);
        }
        locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_insert_rejects_outside_walls() {
        let mut locked = LockedCells::new();
        assert!(!locked.insert(Coord::new(-1, 5), GREEN));
        assert!(!locked.insert(Coord::new(10, 5), GREEN));
        assert!(locked.is_empty());

        assert!(locked.insert(Coord::new(9, 5), GREEN));
        assert!(locked.insert(Coord::new(0, -2), GREEN));
        assert_eq!(locked.len(), 2);
    }

    #[test]
    fn test_insert_same_coord_overwrites() {
        let mut locked = LockedCells::new();
        let blue = Rgb::new(0, 0, 255);
        locked.insert(Coord::new(1, 1), GREEN);
        locked.insert(Coord::new(1, 1), blue);
        assert_eq!(locked.len(), 1);
        assert_eq!(locked.get(Coord::new(1, 1)), Some(blue));
    }

    #[test]
    fn test_from_iter_and_remove() {
        let mut locked: LockedCells = [(Coord::new(0, 0), GREEN), (Coord::new(1, 0), GREEN)]
            .into_iter()
            .collect();
        assert!(locked.contains(Coord::new(1, 0)));
        assert_eq!(locked.remove(Coord::new(1, 0)), Some(GREEN));
        assert!(!locked.contains(Coord::new(1, 0)));
        assert_eq!(locked.coords().collect::<Vec<_>>(), vec![Coord::new(0, 0)]);
    }
}
