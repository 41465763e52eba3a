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

use std::ops::{Add, Mul, Sub};

/// A 2-D vector or point, in world units.
///
/// Used for positions, move vectors, touch points and collision normals.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate (grows downward).
    pub y: f64,
}

impl Vec2 {
    /// Constructs a new `Vec2`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::default()
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns `true` if neither component is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Shorthand for `Vec2::new(x, y)`.
#[inline]
pub fn v2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        v2(self.x * rhs, self.y * rhs)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        v2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        v2(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops() {
        let a = v2(1.0, -2.0);
        let b = v2(0.5, 4.0);
        assert_eq!(a + b, v2(1.5, 2.0));
        assert_eq!(a - b, v2(0.5, -6.0));
        assert_eq!(a * 2.0, v2(2.0, -4.0));
    }

    #[test]
    fn test_zero_and_finite() {
        assert!(Vec2::zero().is_zero());
        assert!(!v2(0.0, 1e-300).is_zero());
        assert!(v2(3.0, 4.0).is_finite());
        assert!(!v2(f64::NAN, 4.0).is_finite());
        assert!(!v2(3.0, f64::NEG_INFINITY).is_finite());
    }
}
