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
//! Random placement of ships that do not overlap ships already on the board.
//!
//! Placement samples a random in-bounds candidate with [`sample_ship`], rejects it if it
//! overlaps any placed ship, and draws again until a free candidate turns up or the
//! attempt budget in [`PlacementConfig`] runs out. The random source is always passed in
//! by the caller, so a seeded or mock generator makes placement fully reproducible.

use enumflags2::BitFlags;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::{
    board::Coordinate,
    geometry::any_overlap,
    ships::{Orientation, Ship, ShipId},
};

pub use self::{
    config::{ConfigError, PlacementConfig, DEFAULT_MAX_ATTEMPTS},
    errors::PlacementExhausted,
    fleet::{place_fleet, FleetLayout},
};

mod config;
mod errors;
mod fleet;

/// Draw a random ship of the given length that lies entirely on the board.
///
/// The orientation is drawn uniformly from the orientations allowed by `config`. The
/// anchor on the long axis is uniform over every position where the whole ship fits, and
/// the coordinate on the short axis is uniform over the whole board. Makes no attempt to
/// avoid other ships.
///
/// Panics if `len` is 0 or larger than the board.
pub fn sample_ship<I, R: Rng + ?Sized>(
    kind: I,
    len: usize,
    config: &PlacementConfig,
    rng: &mut R,
) -> Ship<I> {
    let size = config.board().get();
    assert!(len > 0, "ship length must be nonzero");
    assert!(
        len <= size,
        "ship of length {} does not fit on a {}x{} board",
        len,
        size,
        size
    );
    let orientation = choose_orientation(config.orientations(), rng);
    let long = rng.gen_range(1, size - len + 2);
    let short = rng.gen_range(1, size + 1);
    let anchor = match orientation {
        Orientation::Horizontal => Coordinate::new(long, short),
        Orientation::Vertical => Coordinate::new(short, long),
    };
    Ship::line(kind, anchor, len, orientation)
}

/// Pick uniformly among the allowed orientations.
fn choose_orientation<R: Rng + ?Sized>(
    allowed: BitFlags<Orientation>,
    rng: &mut R,
) -> Orientation {
    match (
        allowed.contains(Orientation::Horizontal),
        allowed.contains(Orientation::Vertical),
    ) {
        (true, false) => Orientation::Horizontal,
        (false, true) => Orientation::Vertical,
        // An empty set fails PlacementConfig::validate; treat it like the full set.
        _ => rng.gen(),
    }
}

/// Try to place a ship of the given kind and length so that it does not overlap any of
/// the `placed` ships.
///
/// Draws up to `config.max_attempts()` candidates and returns the first one that does not
/// overlap. If every candidate overlaps, returns [`PlacementExhausted`]. `placed` is not
/// modified; the caller decides whether to keep the returned ship.
pub fn place_ship<I: ShipId, R: Rng + ?Sized>(
    kind: I,
    len: usize,
    placed: &[Ship<I>],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Ship<I>, PlacementExhausted<I>> {
    let sample_kind = kind.clone();
    place_by(kind, len, placed, config.max_attempts(), || {
        sample_ship(sample_kind.clone(), len, config, &mut *rng)
    })
}

/// Bounded sample-and-check loop behind [`place_ship`]. Each call to `sample` is one
/// attempt.
fn place_by<I, F>(
    kind: I,
    len: usize,
    placed: &[Ship<I>],
    max_attempts: usize,
    mut sample: F,
) -> Result<Ship<I>, PlacementExhausted<I>>
where
    I: ShipId,
    F: FnMut() -> Ship<I>,
{
    for attempt in 1..=max_attempts {
        let candidate = sample();
        if any_overlap(&candidate, placed) {
            trace!(attempt, candidate = ?candidate, "candidate overlaps a placed ship");
        } else {
            debug!(attempt, ship = ?candidate, "placed ship");
            return Ok(candidate);
        }
    }
    warn!(
        kind = ?kind,
        len,
        attempts = max_attempts,
        "no free position found, giving up"
    );
    Err(PlacementExhausted::new(kind, len, max_attempts))
}
