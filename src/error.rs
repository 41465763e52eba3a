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

use crate::geom::{Rect, Vec2};
use std::fmt::Debug;
use thiserror::Error;

/// Errors returned by `World` operations.
///
/// A failed operation leaves the `World` exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error<K: Debug> {
    /// The item was already added.
    #[error("item {0:?} is already in the world")]
    DuplicateItem(K),

    /// The item was never added, or has been removed.
    #[error("item {0:?} is not in the world")]
    UnknownItem(K),

    /// The rect has non-finite fields, a width or height that is not positive,
    /// or extends past the cells the grid can address.
    #[error("invalid rect {0:?}: requires finite fields, positive width and height, and addressable cells")]
    InvalidRect(Rect),

    /// The goal position is not finite, or the move sweeps past the cells the
    /// grid can address.
    #[error("invalid goal {0:?}: requires finite coordinates within addressable cells")]
    InvalidGoal(Vec2),

    /// The query point is not finite.
    #[error("invalid point {0:?}: requires finite coordinates")]
    InvalidPoint(Vec2),

    /// The grid cell size is not finite and positive.
    #[error("invalid cell size {0}: requires a finite value > 0")]
    InvalidCellSize(f64),
}

/// Shorthand for results of `World` operations on items keyed by `K`.
pub type Result<T, K> = std::result::Result<T, Error<K>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;

    #[test]
    fn test_messages() {
        let err: Error<&str> = Error::DuplicateItem("ball");
        assert_eq!(err.to_string(), "item \"ball\" is already in the world");
        let err: Error<u32> = Error::UnknownItem(7);
        assert_eq!(err.to_string(), "item 7 is not in the world");
        let err: Error<u32> = Error::InvalidCellSize(-1.0);
        assert_eq!(err.to_string(), "invalid cell size -1: requires a finite value > 0");
        let err: Error<u32> = Error::InvalidGoal(v2(f64::NAN, 0.0));
        assert!(err.to_string().starts_with("invalid goal"));
        let err: Error<u32> = Error::InvalidPoint(v2(0.0, f64::INFINITY));
        assert_eq!(err.to_string(), "invalid point Vec2 { x: 0.0, y: inf }: requires finite coordinates");
    }
}
