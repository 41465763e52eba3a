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

use crate::geom::{nearest, v2, Vec2, DELTA};

/// An axis-aligned rectangle.
///
/// `x` and `y` locate the top-left corner, with y growing downward, and
/// `w` and `h` are the width and height.
/// Rectangles tracked by a `World` must be finite with positive `w` and `h`,
/// but a bare `Rect` is not validated on construction.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

/// Result of clipping a segment against a `Rect`.
///
/// `ti1` and `ti2` are the parametric fractions along the segment where it
/// enters and exits the rectangle. `normal1` and `normal2` are the normals of
/// the sides responsible for those fractions, or zero if the corresponding
/// bound was never tightened.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct SegmentHit {
    /// Entry fraction.
    pub ti1: f64,
    /// Exit fraction.
    pub ti2: f64,
    /// Normal of the entry side.
    pub normal1: Vec2,
    /// Normal of the exit side.
    pub normal2: Vec2,
}

impl Rect {
    /// Constructs a new `Rect`.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    /// Constructs a `Rect` from its top-left corner and its dimensions.
    #[inline]
    pub fn from_pos_dims(pos: Vec2, dims: Vec2) -> Rect {
        Rect::new(pos.x, pos.y, dims.x, dims.y)
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        v2(self.x, self.y)
    }

    /// Returns the width and height as a vector.
    #[inline]
    pub fn dims(&self) -> Vec2 {
        v2(self.w, self.h)
    }

    /// Returns the same rectangle moved so its top-left corner is at `pos`.
    #[inline]
    pub fn at(&self, pos: Vec2) -> Rect {
        Rect::from_pos_dims(pos, self.dims())
    }

    /// Returns the lowest x coordinate.
    pub fn left(&self) -> f64 { self.x }

    /// Returns the lowest y coordinate.
    pub fn top(&self) -> f64 { self.y }

    /// Returns the highest x coordinate.
    pub fn right(&self) -> f64 { self.x + self.w }

    /// Returns the highest y coordinate.
    pub fn bottom(&self) -> f64 { self.y + self.h }

    /// Returns `true` if all fields are finite and the width and height are
    /// strictly positive.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
            && self.w > 0.0 && self.h > 0.0
    }

    /// Returns the corner of `self` nearest to `point`, axis by axis.
    pub fn nearest_corner(&self, point: Vec2) -> Vec2 {
        v2(nearest(point.x, self.left(), self.right()), nearest(point.y, self.top(), self.bottom()))
    }

    /// Returns the Minkowski difference of `other` and `self`.
    ///
    /// The two rectangles overlap exactly when the origin lies inside the
    /// result, which reduces a rect-vs-rect sweep to a segment-vs-rect clip.
    pub fn diff(&self, other: &Rect) -> Rect {
        Rect::new(
            other.x - self.x - self.w,
            other.y - self.y - self.h,
            self.w + other.w,
            self.h + other.h,
        )
    }

    /// Returns `true` if `point` is strictly inside `self`, by more than
    /// `DELTA` on every side.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x - self.x > DELTA
            && point.y - self.y > DELTA
            && self.right() - point.x > DELTA
            && self.bottom() - point.y > DELTA
    }

    /// Returns `true` if the interiors of the two rectangles overlap.
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Returns the squared distance between the centers of the two rectangles.
    pub fn square_distance(&self, other: &Rect) -> f64 {
        let dx = self.x - other.x + (self.w - other.w) * 0.5;
        let dy = self.y - other.y + (self.h - other.h) * 0.5;
        dx * dx + dy * dy
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn bounding_box(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Clips the segment from `start` to `end` against `self`, restricted to
    /// the parametric range `[ti_min, ti_max]`.
    ///
    /// Returns `None` if the clipped interval is empty, including when the
    /// segment runs parallel to a side while lying outside of it.
    pub fn segment_intersection(&self, start: Vec2, end: Vec2, ti_min: f64, ti_max: f64) -> Option<SegmentHit> {
        let delta = end - start;
        let mut hit = SegmentHit { ti1: ti_min, ti2: ti_max, normal1: Vec2::zero(), normal2: Vec2::zero() };
        // (side normal, p, q) for the left, right, top and bottom sides
        let sides = [
            (v2(-1.0, 0.0), -delta.x, start.x - self.left()),
            (v2(1.0, 0.0), delta.x, self.right() - start.x),
            (v2(0.0, -1.0), -delta.y, start.y - self.top()),
            (v2(0.0, 1.0), delta.y, self.bottom() - start.y),
        ];
        for &(normal, p, q) in sides.iter() {
            if p == 0.0 {
                if q <= 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > hit.ti2 {
                        return None;
                    } else if r > hit.ti1 {
                        hit.ti1 = r;
                        hit.normal1 = normal;
                    }
                } else if r < hit.ti1 {
                    return None;
                } else if r < hit.ti2 {
                    hit.ti2 = r;
                    hit.normal2 = normal;
                }
            }
        }
        Some(hit)
    }
}
