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
//! Types used for defining ships and their shapes.
use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    ops::RangeInclusive,
};

use enumflags2::BitFlags;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{board::Coordinate, geometry};

pub use self::{
    errors::{InvalidShapeReason, ShapeError},
    fleet::{ShipSpec, StandardShip},
};

mod errors;
mod fleet;

/// Trait for types that can be used as a ship's kind label.
/// Kinds are treated as disposable and cheaply cloneable. If you need a complex kind type
/// that isn't cheap to clone, you may want to wrap it in `Rc` or `Arc`.
///
/// Auto-implemented for any type which implements `Debug`,`Clone`, `Eq`, and `Hash`.
pub trait ShipId: Debug + Clone + Eq + Hash {}
impl<T: Debug + Clone + Eq + Hash> ShipId for T {}

/// Direction a ship's long axis runs along.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// The ship runs along the `x` direction.
    Horizontal = 0b01,
    /// The ship runs along the `y` direction.
    Vertical = 0b10,
}

impl Distribution<Orientation> for Standard {
    /// Picks horizontal or vertical with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight-line ship occupying the cells from `(x1, y1)` to `(x2, y2)` inclusive.
///
/// Always satisfies `x1 <= x2`, `y1 <= y2`, and is exactly one cell wide: either
/// `x1 == x2` or `y1 == y2`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ship<I> {
    kind: I,
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl<I> Ship<I> {
    /// Construct a ship covering the cells between the two corners. Fails if either
    /// corner has a zero coordinate, if `start` is not the top-left corner, or if the
    /// corners do not describe a straight line.
    pub fn new(kind: I, start: Coordinate, end: Coordinate) -> Result<Self, ShapeError> {
        let reason = if start.x == 0 || start.y == 0 || end.x == 0 || end.y == 0 {
            Some(InvalidShapeReason::ZeroCoordinate)
        } else if start.x > end.x || start.y > end.y {
            Some(InvalidShapeReason::Reversed)
        } else if start.x != end.x && start.y != end.y {
            Some(InvalidShapeReason::NotStraight)
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ShapeError::new(reason, start, end)),
            None => Ok(Self {
                kind,
                x1: start.x,
                y1: start.y,
                x2: end.x,
                y2: end.y,
            }),
        }
    }

    /// Construct a ship of length `len` whose top-left cell is `anchor`, running in the
    /// given orientation. Panics if `len` is 0 or if either coordinate of `anchor` is 0.
    pub fn line(kind: I, anchor: Coordinate, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        assert!(
            anchor.x > 0 && anchor.y > 0,
            "ship anchor {} is not 1-indexed",
            anchor
        );
        let (x2, y2) = match orientation {
            Orientation::Horizontal => (anchor.x + len - 1, anchor.y),
            Orientation::Vertical => (anchor.x, anchor.y + len - 1),
        };
        Self {
            kind,
            x1: anchor.x,
            y1: anchor.y,
            x2,
            y2,
        }
    }

    /// Get the kind of this ship.
    pub fn kind(&self) -> &I {
        &self.kind
    }

    /// Extract the kind from this ship.
    pub fn into_kind(self) -> I {
        self.kind
    }

    pub fn x1(&self) -> usize {
        self.x1
    }

    pub fn y1(&self) -> usize {
        self.y1
    }

    pub fn x2(&self) -> usize {
        self.x2
    }

    pub fn y2(&self) -> usize {
        self.y2
    }

    /// Top-left cell of the ship.
    pub fn start(&self) -> Coordinate {
        Coordinate::new(self.x1, self.y1)
    }

    /// Bottom-right cell of the ship.
    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.x2, self.y2)
    }

    /// Columns covered by the ship.
    pub fn x_range(&self) -> RangeInclusive<usize> {
        self.x1..=self.x2
    }

    /// Rows covered by the ship.
    pub fn y_range(&self) -> RangeInclusive<usize> {
        self.y1..=self.y2
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        (self.x2 - self.x1) + (self.y2 - self.y1) + 1
    }

    /// Orientation of the ship. Single-cell ships report [`Orientation::Horizontal`].
    pub fn orientation(&self) -> Orientation {
        if self.x1 == self.x2 && self.y1 != self.y2 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Get an iterator over the cells this ship covers, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (x1, x2) = (self.x1, self.x2);
        (self.y1..=self.y2).flat_map(move |y| (x1..=x2).map(move |x| Coordinate::new(x, y)))
    }

    /// Returns true if this ship shares at least one cell with `other`.
    pub fn overlaps<J>(&self, other: &Ship<J>) -> bool {
        geometry::rectangles_overlap(self, other)
    }
}

impl<I: Display> Display for Ship<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{} - {}", self.kind, self.start(), self.end())
    }
}
