// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Side length of a square board. Coordinates on a board of size `n` run from `1` to `n`
/// inclusive on both axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Create a [`BoardSize`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(board) => board,
            None if size == 0 => panic!("BoardSize must be nonzero"),
            None => panic!(
                "BoardSize too large: {} * {} > {}",
                size,
                size,
                usize::max_value()
            ),
        }
    }

    /// Create a [`BoardSize`] with the given side length.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| BoardSize(size))
        }
    }

    /// Get the side length of the board.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    pub fn total_size(self) -> usize {
        self.0 * self.0
    }

    /// Check if the given [`Coordinate`] lies on the board.
    pub fn contains<B: Borrow<Coordinate>>(self, coord: B) -> bool {
        let c = coord.borrow();
        (1..=self.0).contains(&c.x) && (1..=self.0).contains(&c.y)
    }

    /// Convert a coordinate to a row-major index into the board's cells.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y - 1) * self.0 + (coord.x - 1))
        } else {
            None
        }
    }

    /// Get back a coordinate from a row-major index. Panics if `idx >= total_size()`.
    pub fn un_linearize(self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate::new(idx % self.0 + 1, idx / self.0 + 1)
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.0;
        (1..=size).map(move |y| (1..=size).map(move |x| Coordinate { x, y }))
    }
}

impl Default for BoardSize {
    /// The default board is 8x8.
    fn default() -> Self {
        BoardSize(8)
    }
}
