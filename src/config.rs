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

/// Construction parameters for a `World`.
///
/// With the `serde` feature enabled this can be loaded from any serde format,
/// with missing fields taking their default values.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Width and height of the square grid cells used by the broad phase.
    ///
    /// A good choice is a size slightly larger than most of the tracked rects.
    pub cell_size: f64,
}

impl WorldConfig {
    /// Constructs a config with the given `cell_size`.
    pub fn new(cell_size: f64) -> WorldConfig {
        WorldConfig { cell_size }
    }

    /// Returns `true` if `cell_size` is finite and positive.
    pub fn is_valid(&self) -> bool {
        self.cell_size.is_finite() && self.cell_size > 0.0
    }
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig { cell_size: 8.0 }
    }
}
