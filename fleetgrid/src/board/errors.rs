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
//! Errors used by the occupancy [`Grid`][crate::board::Grid].

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a ship could not be written into the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotOccupyReason {
    /// One of the ship's cells is not on the board.
    #[error("the cell is out of bounds")]
    OutOfBounds,
    /// One of the ship's cells is already covered by another ship.
    #[error("the cell is already occupied")]
    Occupied,
}

/// Error returned when a ship cannot be added to the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not occupy cell {coord}: {reason}")]
pub struct OccupyError {
    /// Reason why the ship was rejected.
    reason: CannotOccupyReason,

    /// The first offending cell of the ship.
    coord: Coordinate,
}

impl OccupyError {
    /// Construct an occupy error for the given cell.
    pub(super) fn new(reason: CannotOccupyReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the ship was rejected.
    pub fn reason(&self) -> CannotOccupyReason {
        self.reason
    }

    /// Get the first cell of the ship that could not be occupied.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
