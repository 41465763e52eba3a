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
use crate::config::WorldConfig;
use crate::core::grid::Grid;
use crate::core::{detect_collision, Collision, Contact, Item};
use crate::error::{Error, Result};
use crate::geom::{Rect, Vec2};
use fnv::FnvHashMap;
use log::{debug, trace};
use std::cmp::Ordering;

/// Receives the outlines drawn by `World::draw_debug`.
pub trait DebugDraw {
    /// Draws the outline of `rect`.
    fn draw_rect(&mut self, rect: &Rect);
}

/// A structure that tracks axis-aligned rects and resolves their moves.
///
/// Each item is identified by a caller-supplied key `K` and occupies one rect.
/// Moving an item with `move_item` sweeps its rect toward the goal, stops it at
/// the first thing it touches along each blocked axis, and lets it slide freely
/// along the open axis.
///
/// All operations run to completion on the calling thread. There is no internal
/// locking, so a `World` shared between threads needs an external lock.
pub struct World<K: Item> {
    rects: FnvHashMap<K, Rect>,
    grid: Grid<K>,
}

impl<K: Item> World<K> {
    /// # Constructs a new, empty `World`.
    ///
    /// To reduce the number of rects that are tested, items are placed in a
    /// sparse grid structure behind the scenes. `cell_size` is the width and
    /// height of the cells used in that grid. A good choice is a size that is
    /// slightly larger than most of the rects. Panics unless `cell_size` is
    /// finite and positive. Use `from_config` to get an error instead.
    pub fn new(cell_size: f64) -> World<K> {
        World {
            rects: FnvHashMap::default(),
            grid: Grid::new(cell_size),
        }
    }

    /// Constructs a new, empty `World` from `config`.
    pub fn from_config(config: &WorldConfig) -> Result<World<K>, K> {
        if !config.is_valid() {
            return Err(Error::InvalidCellSize(config.cell_size));
        }
        Ok(World::new(config.cell_size))
    }

    /// Returns the grid cell size.
    pub fn cell_size(&self) -> f64 {
        self.grid.cell_size()
    }

    /// Returns the number of items in the world.
    pub fn count(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if there are no items in the world.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the number of grid cells that currently hold at least one item.
    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    /// Returns `true` if `id` is in the world.
    pub fn contains(&self, id: K) -> bool {
        self.rects.contains_key(&id)
    }

    /// Returns the current rect of `id`.
    pub fn get_rect(&self, id: K) -> Result<Rect, K> {
        self.rects.get(&id).cloned().ok_or(Error::UnknownItem(id))
    }

    /// Iterates over all items and their rects, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = (K, Rect)> + '_ {
        self.rects.iter().map(|(&id, &rect)| (id, rect))
    }

    /// Returns the range of grid cells covered by `rect`, as
    /// `(left, top, width, height)` in cell coordinates.
    ///
    /// Cell coordinates are 1-based: the cell `(cx, cy)` covers
    /// `[(cx - 1) * cell_size, cx * cell_size)` on each axis. Fails with
    /// `InvalidRect` for rects that could not be added to the world.
    pub fn cell_range(&self, rect: &Rect) -> Result<(i32, i32, i32, i32), K> {
        let area = self.area_of(rect)?;
        Ok((area.left(), area.top(), area.width(), area.height()))
    }

    /// Returns the items present in any cell of the given cell range, sorted.
    pub fn query_cells(&self, left: i32, top: i32, width: i32, height: i32) -> Vec<K> {
        if width <= 0 || height <= 0 {
            return Vec::new();
        }
        let area = match Grid::<K>::clip(left, top, width, height) {
            Some(area) => area,
            None => return Vec::new(),
        };
        let mut result: Vec<K> = self.grid.query(area).into_iter().collect();
        result.sort();
        result
    }

    /// Adds `id` to the world, occupying `rect`.
    pub fn add(&mut self, id: K, rect: Rect) -> Result<(), K> {
        if self.rects.contains_key(&id) {
            debug!("rejected duplicate item {:?}", id);
            return Err(Error::DuplicateItem(id));
        }
        let area = self.area_of(&rect)?;
        debug!("adding item {:?} at {:?}", id, rect);
        self.grid.update_area(id, None, Some(area));
        self.rects.insert(id, rect);
        Ok(())
    }

    /// Removes `id` from the world, returning its last rect.
    pub fn remove(&mut self, id: K) -> Result<Rect, K> {
        let rect = self.rects.remove(&id).ok_or_else(|| {
            debug!("cannot remove unknown item {:?}", id);
            Error::UnknownItem(id)
        })?;
        debug!("removing item {:?} from {:?}", id, rect);
        let area = self.registered_area(id, &rect);
        self.grid.update_area(id, Some(area), None);
        Ok(rect)
    }

    /// Teleports `id` so its top-left corner is at `(x, y)`, without any
    /// collision checks.
    ///
    /// `w` and `h` replace the current width and height when given.
    pub fn update(&mut self, id: K, x: f64, y: f64, w: Option<f64>, h: Option<f64>) -> Result<(), K> {
        let old_rect = self.get_rect(id)?;
        let new_rect = Rect::new(x, y, w.unwrap_or(old_rect.w), h.unwrap_or(old_rect.h));
        let new_area = self.area_of(&new_rect)?;
        if new_rect != old_rect {
            let old_area = self.registered_area(id, &old_rect);
            if old_area != new_area {
                self.grid.update_area(id, Some(old_area), Some(new_area));
            }
            self.rects.insert(id, new_rect);
        }
        Ok(())
    }

    /// Returns every collision that `rect` would have if moved so its top-left
    /// corner goes to `goal`, ignoring the item `id` itself.
    ///
    /// `rect` does not need to be in the world. The collisions are ordered by
    /// `ti` (deepest overlap first, then earliest touch), then by the distance
    /// between the rect centers, then by key.
    pub fn project(&self, id: Option<K>, rect: &Rect, goal: Vec2) -> Result<Vec<Collision<K>>, K> {
        self.area_of(rect)?;
        if !goal.is_finite() {
            return Err(Error::InvalidGoal(goal));
        }
        let swept = rect.bounding_box(&rect.at(goal));
        let area = self.grid.cell_rect(&swept).ok_or(Error::InvalidGoal(goal))?;
        let mut collisions: Vec<Collision<K>> = self
            .grid
            .query(area)
            .into_iter()
            .filter(|&other| Some(other) != id)
            .filter_map(|other| {
                let other_rect = self.rects[&other];
                detect_collision(rect, &other_rect, goal).map(|contact| Collision { other, contact })
            })
            .collect();
        collisions.sort_by(|a, b| {
            let a_dist = a.contact.item_rect.square_distance(&a.contact.other_rect);
            let b_dist = b.contact.item_rect.square_distance(&b.contact.other_rect);
            cmp_f64(a.contact.ti, b.contact.ti)
                .then_with(|| cmp_f64(a_dist, b_dist))
                .then_with(|| a.other.cmp(&b.other))
        });
        for collision in &collisions {
            trace!("{:?} projected onto {:?}: {:?}", id, collision.other, collision.contact);
        }
        Ok(collisions)
    }

    /// Computes where `id` would end up if moved toward `goal`, without
    /// actually moving it.
    ///
    /// Returns the adjusted position together with all collisions found along
    /// the way. With no collisions the adjusted position is `goal` itself.
    pub fn check(&self, id: K, goal: Vec2) -> Result<(Vec2, Vec<Collision<K>>), K> {
        let rect = self.get_rect(id)?;
        let collisions = self.project(Some(id), &rect, goal)?;
        let actual = collisions.iter().fold(goal, |goal, collision| slide_goal(&collision.contact, goal));
        Ok((actual, collisions))
    }

    /// Responds to one `collision` of `id` by sliding along the side it hit.
    ///
    /// The item is placed at the collision's touch position. Its blocked axis
    /// stays there while the free axis continues toward `goal`. Returns that
    /// slid goal together with the collisions found when projecting from the
    /// touch position to it, so obstacles that only lie along the slide are
    /// found too. Nothing is moved.
    pub fn slide(&self, id: K, collision: &Collision<K>, goal: Vec2) -> Result<(Vec2, Vec<Collision<K>>), K> {
        let rect = self.get_rect(id)?;
        if !goal.is_finite() {
            return Err(Error::InvalidGoal(goal));
        }
        let contact = &collision.contact;
        let slid = slide_goal(contact, goal);
        let collisions = self.project(Some(id), &rect.at(contact.touch), slid)?;
        Ok((slid, collisions))
    }

    /// Moves `id` toward `goal`, stopping and sliding against other items.
    ///
    /// Returns the same values as `check`, after committing the adjusted
    /// position.
    pub fn move_item(&mut self, id: K, goal: Vec2) -> Result<(Vec2, Vec<Collision<K>>), K> {
        let (actual, collisions) = self.check(id, goal)?;
        self.update(id, actual.x, actual.y, None, None)?;
        Ok((actual, collisions))
    }

    /// Returns the items whose rects intersect `rect`, sorted.
    pub fn query_rect(&self, rect: &Rect) -> Result<Vec<K>, K> {
        let area = self.area_of(rect)?;
        let mut result: Vec<K> = self
            .grid
            .query(area)
            .into_iter()
            .filter(|other| self.rects[other].intersects(rect))
            .collect();
        result.sort();
        Ok(result)
    }

    /// Returns the items whose rects strictly contain `point`, sorted.
    pub fn query_point(&self, point: Vec2) -> Result<Vec<K>, K> {
        if !point.is_finite() {
            return Err(Error::InvalidPoint(point));
        }
        let (cx, cy) = match self.grid.to_cell(point.x, point.y) {
            Some(cell) => cell,
            // no rect reaches past the addressable cells
            None => return Ok(Vec::new()),
        };
        let mut result: Vec<K> = self
            .grid
            .query(CellRect::new(cx, cy, 1, 1))
            .into_iter()
            .filter(|other| self.rects[other].contains_point(point))
            .collect();
        result.sort();
        Ok(result)
    }

    /// Draws the outline of every rect in the world.
    pub fn draw_debug(&self, drawer: &mut impl DebugDraw) {
        for rect in self.rects.values() {
            drawer.draw_rect(rect);
        }
    }

    // Cells for a rect that is about to be stored or queried.
    fn area_of(&self, rect: &Rect) -> Result<CellRect, K> {
        if !rect.is_valid() {
            return Err(Error::InvalidRect(*rect));
        }
        self.grid.cell_rect(rect).ok_or(Error::InvalidRect(*rect))
    }

    // Cells for a rect already in the registry, which were addressable when it
    // was stored.
    fn registered_area(&self, id: K, rect: &Rect) -> CellRect {
        match self.grid.cell_rect(rect) {
            Some(area) => area,
            None => unreachable!("registered item {:?} has unaddressable rect {:?}", id, rect),
        }
    }
}

// The blocked axis snaps to the touch position while the other axis keeps
// `goal`. A stationary contact stays at the touch position.
fn slide_goal(contact: &Contact, goal: Vec2) -> Vec2 {
    let mut result = contact.touch;
    if !contact.movement.is_zero() {
        if contact.normal.x == 0.0 {
            result.x = goal.x;
        } else {
            result.y = goal.y;
        }
    }
    result
}

// rects and goals are validated to be finite, so NaN never reaches this
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
