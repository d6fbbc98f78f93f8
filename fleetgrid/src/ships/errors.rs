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
//! Errors used when constructing ships.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a pair of corners does not describe a valid ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidShapeReason {
    /// Coordinates are 1-indexed; a 0 coordinate is never on the board.
    #[error("coordinates must be 1-indexed")]
    ZeroCoordinate,
    /// The start corner is to the right of or below the end corner.
    #[error("the start corner must be the top-left corner")]
    Reversed,
    /// The corners differ on both axes, so the ship would not be a straight line.
    #[error("ships must be horizontal or vertical lines")]
    NotStraight,
}

/// Error returned when constructing a ship from invalid corners.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid ship from {start} to {end}: {reason}")]
pub struct ShapeError {
    /// Reason the corners were rejected.
    reason: InvalidShapeReason,
    /// The requested start corner.
    start: Coordinate,
    /// The requested end corner.
    end: Coordinate,
}

impl ShapeError {
    /// Construct a shape error from a reason and the offending corners.
    pub(super) fn new(reason: InvalidShapeReason, start: Coordinate, end: Coordinate) -> Self {
        Self { reason, start, end }
    }

    /// Get the reason the ship was rejected.
    pub fn reason(&self) -> InvalidShapeReason {
        self.reason
    }

    /// Get the requested start corner.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Get the requested end corner.
    pub fn end(&self) -> Coordinate {
        self.end
    }
}
