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
use std::fmt::{self, Debug};

use thiserror::Error;

/// Error returned when no free position was found for a ship within the attempt budget.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("could not place {kind:?} of length {len} after {attempts} attempts")]
pub struct PlacementExhausted<I: Debug> {
    /// Kind of the ship that could not be placed.
    kind: I,
    /// Length of the ship that could not be placed.
    len: usize,
    /// Number of candidates that were drawn and rejected.
    attempts: usize,
}

impl<I: Debug> PlacementExhausted<I> {
    /// Create a [`PlacementExhausted`] for the ship with the given kind and length.
    pub(super) fn new(kind: I, len: usize, attempts: usize) -> Self {
        Self {
            kind,
            len,
            attempts,
        }
    }

    /// The kind of ship that was not placed.
    pub fn kind(&self) -> &I {
        &self.kind
    }

    /// The length of ship that was not placed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// How many candidates were rejected before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Extract the kind of the ship from this error.
    pub fn into_kind(self) -> I {
        self.kind
    }
}

impl<I: Debug> Debug for PlacementExhausted<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
