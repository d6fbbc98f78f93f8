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
use rand::{rngs::StdRng, SeedableRng};

use fleetgrid::{
    board::BoardSize,
    placement::{place_fleet, PlacementConfig},
    ships::{ShipSpec, StandardShip},
};

const TRIALS: u64 = 200;

#[test]
fn standard_fleet_usually_fits_on_empty_board() {
    let config = PlacementConfig::new(BoardSize::new(8));
    let mut complete = 0;
    for seed in 0..TRIALS {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = place_fleet(StandardShip::fleet(), &config, &mut rng);
        assert_eq!(layout.slots().len(), 5);
        if layout.is_complete() {
            complete += 1;
            let grid = layout.grid().expect("placed ships must not collide");
            assert_eq!(grid.occupied(), 17, "seed {}", seed);
        }
    }
    assert!(complete >= 180, "only {} of {} fleets placed", complete, TRIALS);
}

#[test]
fn fleet_with_thread_rng_covers_sum_of_lengths() {
    let config = PlacementConfig::default();
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let specs = vec![
            ShipSpec::new("battleship", 4),
            ShipSpec::new("destroyer", 2),
            ShipSpec::new("cruiser", 3),
            ShipSpec::new("carrier", 5),
            ShipSpec::new("submarine", 3),
        ];
        let layout = place_fleet(specs, &config, &mut rng);
        let grid = layout.grid().expect("placed ships must not collide");
        assert_eq!(grid.occupied(), layout.occupied_cells());
        if layout.is_complete() {
            assert_eq!(grid.occupied(), 17);
        }
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let config = PlacementConfig::default();
    let first = place_fleet(
        StandardShip::fleet(),
        &config,
        &mut StdRng::seed_from_u64(17),
    );
    let second = place_fleet(
        StandardShip::fleet(),
        &config,
        &mut StdRng::seed_from_u64(17),
    );
    assert_eq!(first.slots(), second.slots());
}
