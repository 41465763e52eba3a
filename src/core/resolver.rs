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

use crate::core::Contact;
use crate::geom::{sign, v2, Rect, Vec2, DELTA};
use std::f64;

// This module solves for the contact between one moving rect and one fixed
// rect, working on their Minkowski difference so that the sweep becomes a
// segment from the origin along the move vector.

/// Computes how `item` meets `other` when moved so its top-left corner goes to
/// `goal`.
///
/// An existing overlap takes precedence over a swept touch. Pass the item's
/// own position as `goal` for a static overlap check.
/// Returns `None` if the two rects neither overlap nor touch along the move.
pub fn detect_collision(item: &Rect, other: &Rect, goal: Vec2) -> Option<Contact> {
    let movement = goal - item.pos();
    let diff = item.diff(other);
    let origin = Vec2::zero();

    let (overlaps, ti, normal) = if diff.contains_point(origin) {
        let corner = diff.nearest_corner(origin);
        let area = item.w.min(corner.x.abs()) * item.h.min(corner.y.abs());
        (true, -area, Vec2::zero())
    } else {
        let hit = diff.segment_intersection(origin, movement, f64::NEG_INFINITY, f64::INFINITY)?;
        let entering = 0.0 < hit.ti1 + DELTA || (hit.ti1 == 0.0 && hit.ti2 > 0.0);
        if hit.ti1 < 1.0 && (hit.ti1 - hit.ti2).abs() >= DELTA && entering {
            (false, hit.ti1, hit.normal1)
        } else {
            return None;
        }
    };

    let (normal, touch) = if !overlaps {
        (normal, item.pos() + movement * ti)
    } else if movement.is_zero() {
        // push out along the shallower axis only
        let mut push = diff.nearest_corner(origin);
        if push.x.abs() < push.y.abs() {
            push.y = 0.0;
        } else {
            push.x = 0.0;
        }
        (v2(sign(push.x), sign(push.y)), item.pos() + push)
    } else {
        // back up along the move until the rects no longer overlap. The origin
        // is strictly inside `diff`, so the clip always keeps t = 0.
        match diff.segment_intersection(origin, movement, f64::NEG_INFINITY, 1.0) {
            Some(hit) => (hit.normal1, item.pos() + movement * hit.ti1),
            None => unreachable!("overlapping {:?} and {:?} have no exit along {:?}", item, other, movement),
        }
    };

    Some(Contact {
        overlaps,
        ti,
        movement,
        normal,
        touch,
        item_rect: *item,
        other_rect: *other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn block() -> Rect {
        Rect::new(128.0, 128.0, 10.0, 10.0)
    }

    #[test]
    fn test_swept_touch() {
        let ball = Rect::new(100.0, 128.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), v2(125.0, 128.0)).unwrap();
        assert!(!contact.overlaps);
        assert_eq!(contact.ti, 0.8);
        assert_eq!(contact.movement, v2(25.0, 0.0));
        assert_eq!(contact.normal, v2(-1.0, 0.0));
        assert_eq!(contact.touch, v2(120.0, 128.0));
        assert_eq!(contact.item_rect, ball);
        assert_eq!(contact.other_rect, block());
    }

    #[test]
    fn test_touch_point_on_sweep() {
        let ball = Rect::new(125.0, 100.0, 8.0, 8.0);
        let goal = v2(130.0, 150.0);
        let contact = detect_collision(&ball, &block(), goal).unwrap();
        assert!(!contact.overlaps);
        assert!(contact.ti >= 0.0 && contact.ti < 1.0);
        assert_eq!(contact.touch, ball.pos() + contact.movement * contact.ti);
        // enters through the top of the block
        assert_eq!(contact.normal, v2(0.0, -1.0));
        assert_abs_diff_eq!(contact.touch.y + ball.h, 128.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_move_misses() {
        let ball = Rect::new(100.0, 128.0, 8.0, 8.0);
        assert!(detect_collision(&ball, &block(), v2(119.0, 128.0)).is_none());
        assert!(detect_collision(&ball, &block(), v2(120.0, 128.0)).is_none());
        assert!(detect_collision(&ball, &block(), ball.pos()).is_none());
    }

    #[test]
    fn test_tunneling_is_caught() {
        let ball = Rect::new(100.0, 128.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), v2(300.0, 128.0)).unwrap();
        assert_abs_diff_eq!(contact.touch.x, 120.0, epsilon = 1e-9);
        assert_eq!(contact.touch.y, 128.0);
    }

    #[test]
    fn test_resting_contact() {
        let ball = Rect::new(120.0, 128.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), v2(125.0, 128.0)).unwrap();
        assert!(!contact.overlaps);
        assert_eq!(contact.ti, 0.0);
        assert_eq!(contact.touch, v2(120.0, 128.0));
        assert_eq!(contact.normal, v2(-1.0, 0.0));

        // moving away from the wall is free
        assert!(detect_collision(&ball, &block(), v2(115.0, 128.0)).is_none());
    }

    #[test]
    fn test_static_overlap_pushes_along_shallow_axis() {
        let ball = Rect::new(124.0, 130.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), ball.pos()).unwrap();
        assert!(contact.overlaps);
        assert_eq!(contact.ti, -32.0);
        assert!(contact.movement.is_zero());
        assert_eq!(contact.normal, v2(-1.0, 0.0));
        assert_eq!(contact.touch, v2(120.0, 130.0));
    }

    #[test]
    fn test_overlap_takes_precedence() {
        let ball = Rect::new(124.0, 130.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), v2(130.0, 130.0)).unwrap();
        assert!(contact.overlaps);
        assert!(contact.ti <= 0.0);
        assert_eq!(contact.normal, v2(-1.0, 0.0));
        assert_abs_diff_eq!(contact.touch.x, 120.0, epsilon = 1e-9);
        assert_eq!(contact.touch.y, 130.0);
    }

    #[test]
    fn test_overlap_backs_out_against_the_move() {
        // moving up out of the block exits backward through its bottom side
        let ball = Rect::new(124.0, 130.0, 8.0, 8.0);
        let contact = detect_collision(&ball, &block(), v2(124.0, 100.0)).unwrap();
        assert!(contact.overlaps);
        assert_eq!(contact.ti, -32.0);
        assert_eq!(contact.movement, v2(0.0, -30.0));
        assert_eq!(contact.normal, v2(0.0, 1.0));
        assert_eq!(contact.touch.x, 124.0);
        assert_abs_diff_eq!(contact.touch.y, 138.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overlap_ranks_by_depth() {
        let shallow = Rect::new(127.0, 128.0, 8.0, 8.0);
        let deep = Rect::new(130.0, 129.0, 8.0, 8.0);
        let shallow_ti = detect_collision(&shallow, &block(), shallow.pos()).unwrap().ti;
        let deep_ti = detect_collision(&deep, &block(), deep.pos()).unwrap().ti;
        assert!(deep_ti < shallow_ti);
    }

    #[test]
    fn test_grazing_is_not_overlap() {
        // sharing an edge is neither an overlap nor a touch when sliding along it
        let ball = Rect::new(120.0, 128.0, 8.0, 8.0);
        assert!(detect_collision(&ball, &block(), ball.pos()).is_none());
        let above = Rect::new(128.0, 120.0, 8.0, 8.0);
        assert!(detect_collision(&above, &block(), v2(140.0, 120.0)).is_none());
    }
}
