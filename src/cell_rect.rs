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

// CellRect is a non-empty rectangular range of grid cell coordinates. The
// same half-open range is used to insert, remove and query, so a footprint
// is always cleared exactly as it was filled.

/// A non-empty range of grid cells, `[left, left + width) x [top, top + height)`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct CellRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl CellRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> CellRect {
        assert!(width > 0 && height > 0, "CellRect contains no cells");
        assert!(
            left.checked_add(width).is_some() && top.checked_add(height).is_some(),
            "CellRect exceeds the cell coordinate range"
        );
        CellRect { left, top, width, height }
    }

    pub fn left(self) -> i32 { self.left }
    pub fn top(self) -> i32 { self.top }
    pub fn width(self) -> i32 { self.width }
    pub fn height(self) -> i32 { self.height }

    pub fn contains(self, (cx, cy): (i32, i32)) -> bool {
        cx >= self.left && cx < self.left + self.width && cy >= self.top && cy < self.top + self.height
    }

    /// Iterates row by row over the cells of the range.
    pub fn iter(self) -> Iter {
        Iter { rect: self, next: Some((self.left, self.top)) }
    }
}

pub struct Iter {
    rect: CellRect,
    next: Option<(i32, i32)>,
}

impl Iterator for Iter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        let current = self.next?;
        let (cx, cy) = current;
        self.next = if cx + 1 < self.rect.left + self.rect.width {
            Some((cx + 1, cy))
        } else if cy + 1 < self.rect.top + self.rect.height {
            Some((self.rect.left, cy + 1))
        } else {
            None
        };
        Some(current)
    }
}
