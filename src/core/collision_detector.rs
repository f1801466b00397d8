use std::collections::HashMap;

use crate::geometry::Position;

/// A cell claimed by two or more vehicles at the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Sorted lexicographically.
    pub ids: Vec<String>,
    pub cell: Position,
    pub step: usize,
}

/// Cell -> ids claiming it, in the order cells were first claimed.
///
/// Built fresh for every step so nothing leaks between steps.
#[derive(Debug, Default, Clone)]
pub struct OccupancyMap {
    cells: Vec<(Position, Vec<String>)>,
    index: HashMap<Position, usize>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Position, id: &str) {
        match self.index.get(&cell) {
            Some(&slot) => self.cells[slot].1.push(id.to_string()),
            None => {
                self.index.insert(cell, self.cells.len());
                self.cells.push((cell, vec![id.to_string()]));
            }
        }
    }

    pub fn get(&self, cell: &Position) -> Option<&[String]> {
        self.index
            .get(cell)
            .map(|&slot| self.cells[slot].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &[String])> {
        self.cells.iter().map(|(cell, ids)| (cell, ids.as_slice()))
    }

    /// First cell, in claim order, held by more than one id. Ids come back sorted.
    pub fn first_collision(&self) -> Option<(Position, Vec<String>)> {
        self.cells
            .iter()
            .find(|(_, ids)| ids.len() > 1)
            .map(|(cell, ids)| {
                let mut ids = ids.clone();
                ids.sort();
                (*cell, ids)
            })
    }
}

impl<'a> FromIterator<(Position, &'a str)> for OccupancyMap {
    fn from_iter<I: IntoIterator<Item = (Position, &'a str)>>(iter: I) -> Self {
        let mut map = OccupancyMap::new();
        for (cell, id) in iter {
            map.insert(cell, id);
        }
        map
    }
}

pub struct CollisionDetector;

impl CollisionDetector {
    pub fn detect(occupancy: &OccupancyMap, step: usize) -> Option<Collision> {
        occupancy
            .first_collision()
            .map(|(cell, ids)| Collision { ids, cell, step })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_occupants_do_not_collide() {
        let map: OccupancyMap = [(Position::new(0, 0), "A"), (Position::new(1, 0), "B")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert!(CollisionDetector::detect(&map, 1).is_none());
    }

    #[test]
    fn shared_cell_reports_sorted_ids() {
        let map: OccupancyMap = [
            (Position::new(1, 1), "C"),
            (Position::new(1, 1), "A"),
            (Position::new(1, 1), "B"),
        ]
        .into_iter()
        .collect();
        let collision = CollisionDetector::detect(&map, 4).unwrap();
        assert_eq!(collision.ids, vec!["A", "B", "C"]);
        assert_eq!(collision.cell, Position::new(1, 1));
        assert_eq!(collision.step, 4);
        // the map itself keeps claim order
        assert_eq!(map.get(&Position::new(1, 1)).unwrap(), &["C", "A", "B"]);
    }

    #[test]
    fn first_claimed_cell_wins_over_lexicographic_order() {
        let map: OccupancyMap = [
            (Position::new(5, 5), "X"),
            (Position::new(0, 0), "P"),
            (Position::new(0, 0), "Q"),
            (Position::new(5, 5), "Y"),
        ]
        .into_iter()
        .collect();
        let (cell, ids) = map.first_collision().unwrap();
        assert_eq!(cell, Position::new(5, 5));
        assert_eq!(ids, vec!["X", "Y"]);
    }
}
