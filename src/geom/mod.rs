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

//! Module containing geometry primitives.

mod rect;
mod vec;

pub use self::rect::*;
pub use self::vec::*;

/// Margin used by boundary comparisons, so that grazing contacts do not
/// flicker in and out due to floating point noise.
pub const DELTA: f64 = 1e-10;

/// Returns `-1.0`, `0.0` or `1.0` according to the sign of `x`.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x == 0.0 {
        0.0
    } else {
        -1.0
    }
}

/// Returns whichever of `a` and `b` is closer to `x`, favoring `b` on ties.
pub fn nearest(x: f64, a: f64, b: f64) -> f64 {
    if (a - x).abs() < (b - x).abs() {
        a
    } else {
        b
    }
}
