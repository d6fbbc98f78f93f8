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
//! Fleet specifications: which ships to place, and the standard set.
use std::fmt;

/// Request to place one ship of the given kind and length.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShipSpec<I> {
    kind: I,
    len: usize,
}

impl<I> ShipSpec<I> {
    /// Construct a spec for a ship with the specified kind and length. Panics if len is 0.
    pub fn new(kind: I, len: usize) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        Self { kind, len }
    }

    /// Get the kind of ship requested.
    pub fn kind(&self) -> &I {
        &self.kind
    }

    /// Get the length of ship requested.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extract the kind and length from this spec.
    pub fn into_inner(self) -> (I, usize) {
        (self.kind, self.len)
    }
}

/// Kinds in the standard fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StandardShip {
    /// Battleship: length 4.
    Battleship,
    /// Destroyer: length 2.
    Destroyer,
    /// Cruiser: length 3.
    Cruiser,
    /// Carrier: length 5.
    Carrier,
    /// Submarine: length 3.
    Submarine,
}

impl StandardShip {
    /// All standard ships, in the order they are placed.
    pub const ALL: &'static [StandardShip] = &[
        StandardShip::Battleship,
        StandardShip::Destroyer,
        StandardShip::Cruiser,
        StandardShip::Carrier,
        StandardShip::Submarine,
    ];

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            StandardShip::Carrier => 5,
            StandardShip::Battleship => 4,
            StandardShip::Cruiser => 3,
            StandardShip::Submarine => 3,
            StandardShip::Destroyer => 2,
        }
    }

    /// Lowercase name of this ship type.
    pub fn name(self) -> &'static str {
        match self {
            StandardShip::Carrier => "carrier",
            StandardShip::Battleship => "battleship",
            StandardShip::Cruiser => "cruiser",
            StandardShip::Submarine => "submarine",
            StandardShip::Destroyer => "destroyer",
        }
    }

    /// Get the spec cooresponding to this ship type.
    pub fn spec(self) -> ShipSpec<StandardShip> {
        ShipSpec::new(self, self.len())
    }

    /// Specs for the whole standard fleet, in placement order.
    pub fn fleet() -> Vec<ShipSpec<StandardShip>> {
        Self::ALL.iter().map(|ship| ship.spec()).collect()
    }
}

impl fmt::Display for StandardShip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet_covers_seventeen_cells() {
        let fleet = StandardShip::fleet();
        let lens: Vec<usize> = fleet.iter().map(ShipSpec::len).collect();
        assert_eq!(lens, vec![4, 2, 3, 5, 3]);
        assert_eq!(lens.iter().sum::<usize>(), 17);
    }

    #[test]
    #[should_panic(expected = "nonzero")]
    fn zero_length_spec_panics() {
        ShipSpec::new("pt", 0);
    }

    #[test]
    fn display_pads_name() {
        assert_eq!(format!("{:>8}", StandardShip::Cruiser), " cruiser");
    }
}
