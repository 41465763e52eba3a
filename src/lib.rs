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

//! Swept axis-aligned rectangle collisions for 2D games.
//!
//! A `World` tracks rects by caller-supplied keys. `World::move_item` sweeps a
//! rect toward a goal position. It stops the rect where it first touches
//! another one and lets it slide along the unblocked axis. A sparse grid keeps
//! the number of rects tested per move small.
//!
//! ```
//! use bump2d::geom::{v2, Rect};
//! use bump2d::World;
//!
//! let mut world: World<&str> = World::new(8.0);
//! world.add("block", Rect::new(128.0, 128.0, 10.0, 10.0)).unwrap();
//! world.add("ball", Rect::new(100.0, 128.0, 8.0, 8.0)).unwrap();
//!
//! let (pos, collisions) = world.move_item("ball", v2(125.0, 128.0)).unwrap();
//! assert_eq!(pos, v2(120.0, 128.0));
//! assert_eq!(collisions.len(), 1);
//! assert_eq!(collisions[0].other, "block");
//! ```

pub mod geom;
mod cell_rect;
mod config;
mod core;
mod error;

pub use crate::config::WorldConfig;
pub use crate::core::*;
pub use crate::error::{Error, Result};
