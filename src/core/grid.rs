// Copyright 2026 The bump2d Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::cell_rect::CellRect;
use crate::core::Item;
use crate::geom::Rect;
use fnv::{FnvHashMap, FnvHashSet};
use log::trace;
use std::cmp;
use std::collections::hash_map;

// Grid is a sparse 2D grid implemented as a HashMap from cell coordinates to
// the set of items in that cell. This is the broad phase used to decide which
// items to test against a moving rect. A cell exists in the map only while it
// holds at least one item, so the map doubles as the index of non-empty cells.
//
// Cell coordinates are 1-based: the cell at (cx, cy) covers
// [(cx - 1) * cell_size, cx * cell_size) horizontally, and likewise vertically.

/// Largest magnitude of a cell coordinate. Any range between two addressable
/// cells, and one past its end, still fits in an `i32`.
pub const MAX_CELL: i32 = i32::MAX / 2;

pub struct Grid<K: Item> {
    cells: FnvHashMap<(i32, i32), FnvHashSet<K>>,
    cell_size: f64,
}

impl<K: Item> Grid<K> {
    pub fn new(cell_size: f64) -> Grid<K> {
        assert!(cell_size.is_finite() && cell_size > 0.0, "requires finite cell_size > 0.0");
        Grid { cells: FnvHashMap::default(), cell_size }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell containing `(x, y)`, or `None` if the point is not
    /// finite or lies beyond the addressable cells.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        let cx = cell_index((x / self.cell_size).floor() + 1.0)?;
        let cy = cell_index((y / self.cell_size).floor() + 1.0)?;
        Some((cx, cy))
    }

    /// Returns the cells covered by `rect`, or `None` if some of them are not
    /// addressable.
    pub fn cell_rect(&self, rect: &Rect) -> Option<CellRect> {
        let (cx, cy) = self.to_cell(rect.x, rect.y)?;
        let cr = cell_index((rect.right() / self.cell_size).ceil())?;
        let cb = cell_index((rect.bottom() / self.cell_size).ceil())?;
        // a sliver lying exactly on a cell boundary can round to zero cells
        Some(CellRect::new(cx, cy, cmp::max(cr - cx + 1, 1), cmp::max(cb - cy + 1, 1)))
    }

    /// Clips an arbitrary cell range to the addressable cells. Returns `None`
    /// if nothing is left.
    pub fn clip(left: i32, top: i32, width: i32, height: i32) -> Option<CellRect> {
        let (left, width) = clip_span(left, width)?;
        let (top, height) = clip_span(top, height)?;
        Some(CellRect::new(left, top, width, height))
    }

    /// Returns `true` if `item` was not already in the cell.
    pub fn insert(&mut self, item: K, cell: (i32, i32)) -> bool {
        self.cells.entry(cell).or_insert_with(FnvHashSet::default).insert(item)
    }

    /// Returns `true` if `item` was in the cell.
    pub fn remove(&mut self, item: K, cell: (i32, i32)) -> bool {
        if let hash_map::Entry::Occupied(mut entry) = self.cells.entry(cell) {
            let success = entry.get_mut().remove(&item);
            if entry.get().is_empty() {
                entry.remove();
            }
            success
        } else {
            false
        }
    }

    pub fn query(&self, area: CellRect) -> FnvHashSet<K> {
        let mut result = FnvHashSet::default();
        let area_cells = i64::from(area.width()) * i64::from(area.height());
        if area_cells > self.cells.len() as i64 {
            // a long sweep covers more cells than are occupied
            for (&cell, items) in &self.cells {
                if area.contains(cell) {
                    result.extend(items.iter().cloned());
                }
            }
        } else {
            for cell in area.iter() {
                if let Some(items) = self.cells.get(&cell) {
                    result.extend(items.iter().cloned());
                }
            }
        }
        result
    }

    // Moves the footprint of `item` from `old_area` to `new_area`, touching
    // only the cells in the symmetric difference.
    pub fn update_area(&mut self, item: K, old_area: Option<CellRect>, new_area: Option<CellRect>) {
        trace!("re-bucketing {:?} from {:?} to {:?}", item, old_area, new_area);
        if let Some(old_area) = old_area {
            for cell in old_area.iter() {
                if new_area.map_or(true, |new_area| !new_area.contains(cell)) {
                    let success = self.remove(item, cell);
                    assert!(success, "item {:?} missing from cell {:?}", item, cell);
                }
            }
        }
        if let Some(new_area) = new_area {
            for cell in new_area.iter() {
                if old_area.map_or(true, |old_area| !old_area.contains(cell)) {
                    let success = self.insert(item, cell);
                    assert!(success, "item {:?} already in cell {:?}", item, cell);
                }
            }
        }
    }
}

fn cell_index(value: f64) -> Option<i32> {
    if value.abs() <= f64::from(MAX_CELL) {
        Some(value as i32)
    } else {
        None
    }
}

fn clip_span(start: i32, len: i32) -> Option<(i32, i32)> {
    let lo = cmp::max(i64::from(start), i64::from(-MAX_CELL));
    let hi = cmp::min(i64::from(start) + i64::from(len), i64::from(MAX_CELL) + 1);
    if lo < hi {
        Some((lo as i32, (hi - lo) as i32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cell() {
        let grid: Grid<u32> = Grid::new(8.0);
        assert_eq!(grid.to_cell(0.0, 0.0), Some((1, 1)));
        assert_eq!(grid.to_cell(7.9, 8.0), Some((1, 2)));
        assert_eq!(grid.to_cell(-0.5, -8.0), Some((0, 0)));
        assert_eq!(grid.to_cell(-8.5, 100.0), Some((-1, 13)));
    }

    #[test]
    fn test_to_cell_out_of_range() {
        let grid: Grid<u32> = Grid::new(8.0);
        assert_eq!(grid.to_cell(2.0e10, 0.0), None);
        assert_eq!(grid.to_cell(0.0, -2.0e10), None);
        assert_eq!(grid.to_cell(f64::INFINITY, 0.0), None);
        assert_eq!(grid.to_cell(0.0, f64::NAN), None);
        assert_eq!(grid.to_cell(8.0 * f64::from(MAX_CELL - 1), 0.0), Some((MAX_CELL, 1)));
    }

    #[test]
    fn test_cell_rect() {
        let grid: Grid<u32> = Grid::new(8.0);
        let cell_rect = |x, y, w, h| grid.cell_rect(&Rect::new(x, y, w, h));
        assert_eq!(cell_rect(0.0, 0.0, 8.0, 8.0), Some(CellRect::new(1, 1, 1, 1)));
        assert_eq!(cell_rect(100.0, 128.0, 8.0, 8.0), Some(CellRect::new(13, 17, 2, 1)));
        assert_eq!(cell_rect(128.0, 128.0, 10.0, 10.0), Some(CellRect::new(17, 17, 2, 2)));
        assert_eq!(cell_rect(-4.0, -4.0, 8.0, 8.0), Some(CellRect::new(0, 0, 2, 2)));
        assert_eq!(cell_rect(8.0, 8.0, 1e-20, 1e-20), Some(CellRect::new(2, 2, 1, 1)));
        assert_eq!(cell_rect(0.0, 0.0, 2.0e10, 8.0), None);
        assert_eq!(cell_rect(-2.0e10, 0.0, 8.0, 8.0), None);
        assert_eq!(cell_rect(0.0, 0.0, 1.0e308, 1.0e308), None);
    }

    #[test]
    fn test_clip() {
        assert_eq!(Grid::<u32>::clip(3, 4, 2, 5), Some(CellRect::new(3, 4, 2, 5)));
        assert_eq!(Grid::<u32>::clip(i32::MIN, 0, 10, 1), None);
        assert_eq!(Grid::<u32>::clip(MAX_CELL, 0, 10, 1), Some(CellRect::new(MAX_CELL, 0, 1, 1)));
        assert_eq!(Grid::<u32>::clip(i32::MAX - 1, 0, 10, 1), None);
        assert_eq!(
            Grid::<u32>::clip(i32::MIN, i32::MIN, i32::MAX, i32::MAX),
            Some(CellRect::new(-MAX_CELL, -MAX_CELL, MAX_CELL - 1, MAX_CELL - 1))
        );
    }

    #[test]
    fn test_insert_remove() {
        let mut grid: Grid<u32> = Grid::new(8.0);
        assert!(grid.insert(1, (0, 0)));
        assert!(!grid.insert(1, (0, 0)));
        assert!(grid.insert(2, (0, 0)));
        assert_eq!(grid.cell_count(), 1);
        assert!(grid.remove(1, (0, 0)));
        assert!(!grid.remove(1, (0, 0)));
        assert!(!grid.remove(1, (5, 5)));
        assert_eq!(grid.cell_count(), 1);
        assert!(grid.remove(2, (0, 0)));
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn test_query_dedups() {
        let mut grid: Grid<u32> = Grid::new(8.0);
        grid.update_area(1, None, Some(CellRect::new(0, 0, 2, 2)));
        grid.update_area(2, None, Some(CellRect::new(1, 1, 1, 1)));
        grid.update_area(3, None, Some(CellRect::new(5, 5, 1, 1)));
        let found = grid.query(CellRect::new(0, 0, 3, 3));
        assert_eq!(found.len(), 2);
        assert!(found.contains(&1) && found.contains(&2));
        assert!(grid.query(CellRect::new(10, 10, 2, 2)).is_empty());
    }

    #[test]
    fn test_query_wide_area() {
        let mut grid: Grid<u32> = Grid::new(8.0);
        grid.update_area(1, None, Some(CellRect::new(-5, 0, 1, 1)));
        grid.update_area(2, None, Some(CellRect::new(1000, 0, 1, 1)));
        grid.update_area(3, None, Some(CellRect::new(0, 2, 1, 1)));
        let found = grid.query(CellRect::new(-MAX_CELL, 0, 2 * MAX_CELL, 2));
        assert_eq!(found.len(), 2);
        assert!(found.contains(&1) && found.contains(&2));
    }

    #[test]
    fn test_update_area() {
        let mut grid: Grid<u32> = Grid::new(8.0);
        grid.update_area(7, None, Some(CellRect::new(0, 0, 2, 2)));
        assert_eq!(grid.cell_count(), 4);
        grid.update_area(7, Some(CellRect::new(0, 0, 2, 2)), Some(CellRect::new(1, 0, 2, 1)));
        assert_eq!(grid.cell_count(), 2);
        assert!(grid.query(CellRect::new(0, 0, 1, 2)).is_empty());
        assert!(grid.query(CellRect::new(1, 1, 2, 1)).is_empty());
        assert_eq!(grid.query(CellRect::new(2, 0, 1, 1)).len(), 1);
        grid.update_area(7, Some(CellRect::new(1, 0, 2, 1)), None);
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_update_area_inconsistent() {
        let mut grid: Grid<u32> = Grid::new(8.0);
        grid.update_area(7, Some(CellRect::new(0, 0, 1, 1)), None);
    }
}
