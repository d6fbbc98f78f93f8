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
//! Placing a whole fleet, one ship after another.

use rand::Rng;
use tracing::debug;

use crate::{
    board::{BoardSize, Grid, OccupyError},
    placement::{place_ship, PlacementConfig, PlacementExhausted},
    ships::{Ship, ShipId, ShipSpec},
};

/// Result of placing a fleet. Holds one slot per requested ship, in request order.
#[derive(Debug, Clone)]
pub struct FleetLayout<I: ShipId> {
    /// Size of the board the fleet was placed on.
    board: BoardSize,
    /// Outcome of each requested ship.
    slots: Vec<Result<Ship<I>, PlacementExhausted<I>>>,
}

impl<I: ShipId> FleetLayout<I> {
    /// Size of the board the fleet was placed on.
    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Outcome of each requested ship, in request order.
    pub fn slots(&self) -> &[Result<Ship<I>, PlacementExhausted<I>>] {
        &self.slots
    }

    /// Extract the per-ship outcomes.
    pub fn into_slots(self) -> Vec<Result<Ship<I>, PlacementExhausted<I>>> {
        self.slots
    }

    /// Iterate the ships that were placed, in request order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship<I>> {
        self.slots.iter().filter_map(|slot| slot.as_ref().ok())
    }

    /// Iterate the ships that could not be placed, in request order.
    pub fn failures(&self) -> impl Iterator<Item = &PlacementExhausted<I>> {
        self.slots.iter().filter_map(|slot| slot.as_ref().err())
    }

    /// Returns true if every requested ship was placed.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Result::is_ok)
    }

    /// Total number of cells covered by placed ships.
    pub fn occupied_cells(&self) -> usize {
        self.ships().map(Ship::len).sum()
    }

    /// Materialize the placed ships into an occupancy grid.
    pub fn grid(&self) -> Result<Grid<I>, OccupyError> {
        Grid::from_ships(self.board, self.ships())
    }
}

/// Place each requested ship in order, each one avoiding every ship placed before it.
///
/// A ship that cannot be placed leaves a failed slot and placement moves on to the next
/// request. Earlier ships are never moved to make room, so whether a whole fleet fits
/// depends on request order and on the draws made.
pub fn place_fleet<I, S, R>(specs: S, config: &PlacementConfig, rng: &mut R) -> FleetLayout<I>
where
    I: ShipId,
    S: IntoIterator<Item = ShipSpec<I>>,
    R: Rng + ?Sized,
{
    let mut placed: Vec<Ship<I>> = Vec::new();
    let mut slots = Vec::new();
    for spec in specs {
        let (kind, len) = spec.into_inner();
        let outcome = place_ship(kind, len, &placed, config, &mut *rng);
        if let Ok(ship) = &outcome {
            placed.push(ship.clone());
        }
        slots.push(outcome);
    }
    debug!(
        requested = slots.len(),
        placed = placed.len(),
        "fleet placement finished"
    );
    FleetLayout {
        board: config.board(),
        slots,
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{geometry::rectangles_overlap, ships::Orientation};

    #[test]
    fn no_two_placed_ships_overlap() {
        let config = PlacementConfig::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let specs = vec![
                ShipSpec::new("carrier", 5),
                ShipSpec::new("battleship", 4),
                ShipSpec::new("cruiser", 3),
                ShipSpec::new("submarine", 3),
                ShipSpec::new("destroyer", 2),
                ShipSpec::new("pt", 2),
            ];
            let layout = place_fleet(specs, &config, &mut rng);
            assert_eq!(layout.slots().len(), 6);
            let ships: Vec<_> = layout.ships().collect();
            for (i, a) in ships.iter().enumerate() {
                for b in &ships[i + 1..] {
                    assert!(!rectangles_overlap(*a, *b), "seed {}: {} vs {}", seed, a, b);
                }
            }
            let grid = layout.grid().unwrap();
            assert_eq!(grid.occupied(), layout.occupied_cells());
        }
    }

    #[test]
    fn failed_slot_does_not_stop_later_ships() {
        // Three full rows, then a ship of three leaves a single free cell.
        let config = PlacementConfig::new(BoardSize::new(4))
            .with_max_attempts(1000)
            .with_orientations(Orientation::Horizontal);
        let specs = vec![
            ShipSpec::new("a", 4),
            ShipSpec::new("b", 4),
            ShipSpec::new("c", 4),
            ShipSpec::new("d", 3),
            ShipSpec::new("e", 2),
            ShipSpec::new("f", 1),
        ];
        let mut rng = StdRng::seed_from_u64(2020);
        let layout = place_fleet(specs, &config, &mut rng);

        assert!(!layout.is_complete());
        let failed: Vec<_> = layout.failures().map(|err| *err.kind()).collect();
        assert_eq!(failed, vec!["e"]);
        let placed: Vec<_> = layout.ships().map(|ship| *ship.kind()).collect();
        assert_eq!(placed, vec!["a", "b", "c", "d", "f"]);
        assert_eq!(layout.occupied_cells(), 16);
        assert_eq!(layout.grid().unwrap().occupied(), 16);
    }

    #[test]
    fn empty_fleet_is_complete() {
        let mut rng = StdRng::seed_from_u64(0);
        let layout = place_fleet(
            Vec::<ShipSpec<&str>>::new(),
            &PlacementConfig::default(),
            &mut rng,
        );
        assert!(layout.is_complete());
        assert_eq!(layout.occupied_cells(), 0);
        assert_eq!(layout.board(), BoardSize::new(8));
    }
}
