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
//! Tunable parameters for random placement.

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{board::BoardSize, ships::Orientation};

/// Number of candidates drawn per ship before giving up, unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Reason a [`PlacementConfig`] cannot be used.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Placement would give up before drawing a single candidate.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    /// No orientation is allowed, so no candidate can be drawn.
    #[error("at least one orientation must be allowed")]
    NoOrientations,
}

/// Parameters shared by every placement in a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementConfig {
    /// Size of the board ships are placed on.
    board: BoardSize,
    /// Number of candidates to draw per ship before reporting failure.
    max_attempts: usize,
    /// Orientations candidates may be drawn in.
    orientations: BitFlags<Orientation>,
}

impl PlacementConfig {
    /// Create a config for the given board with the default attempt budget and both
    /// orientations allowed.
    pub fn new(board: BoardSize) -> Self {
        Self {
            board,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            orientations: BitFlags::all(),
        }
    }

    /// Set the number of candidates drawn per ship before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Restrict the orientations candidates may be drawn in.
    pub fn with_orientations<B: Into<BitFlags<Orientation>>>(mut self, orientations: B) -> Self {
        self.orientations = orientations.into();
        self
    }

    /// Check that placement with this config can draw at least one candidate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            Err(ConfigError::ZeroAttempts)
        } else if self.orientations.is_empty() {
            Err(ConfigError::NoOrientations)
        } else {
            Ok(())
        }
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn orientations(&self) -> BitFlags<Orientation> {
        self.orientations
    }
}

impl Default for PlacementConfig {
    /// An 8x8 board, 10 attempts per ship, both orientations.
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
