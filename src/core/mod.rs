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

mod grid;
mod resolver;
mod world;

pub use self::resolver::detect_collision;
pub use self::world::{DebugDraw, World};

use crate::geom::{Rect, Vec2};
use std::fmt::Debug;
use std::hash::Hash;

/// Identity of an item tracked by a `World`.
///
/// The key is supplied by the caller and is used both in the rect registry and
/// in the grid cells. Any small copyable type works, such as an integer id or a
/// `&'static str` name. The `Ord` bound is used to order collisions and query
/// results deterministically.
pub trait Item: Copy + Eq + Hash + Ord + Debug {}

impl<T: Copy + Eq + Hash + Ord + Debug> Item for T {}

/// Describes how a moving rect meets one other rect.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Contact {
    /// `true` if the rects already overlapped before the move.
    pub overlaps: bool,

    /// Fraction of `movement` at which the contact happens, in `[0, 1)` for a
    /// swept touch. For an overlap this is the negated intersection area, so
    /// deeper overlaps sort first.
    pub ti: f64,

    /// The requested move, from the item's position to its goal.
    pub movement: Vec2,

    /// Normal of the contacted side of the other rect, with components in
    /// `{-1, 0, 1}`. It points from the other rect toward the moving item.
    pub normal: Vec2,

    /// Position of the moving item's top-left corner at the moment of contact,
    /// or the pushed-out position for a stationary overlap.
    pub touch: Vec2,

    /// The moving item's rect before the move.
    pub item_rect: Rect,

    /// The other rect.
    pub other_rect: Rect,
}

/// A `Contact` together with the item that was hit.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Collision<K> {
    /// The item that was hit.
    pub other: K,
    /// How it was hit.
    pub contact: Contact,
}
