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
use std::io::{self, Write};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetgrid::placement::{place_fleet, FleetLayout};

use crate::cli::Options;

mod cli;
mod render;
mod symbols;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = cli::app().get_matches();
    let options = Options::from_matches(&matches);
    info!(
        size = options.config.board().get(),
        attempts = options.config.max_attempts(),
        ships = options.fleet.len(),
        seed = ?options.seed,
        "placing fleet"
    );

    let layout = match options.seed {
        Some(seed) => run(options, &mut StdRng::seed_from_u64(seed)),
        None => run(options, &mut rand::thread_rng()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let grid = layout
        .grid()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    render::show_board(&grid, &mut out)?;
    out.flush()?;

    let mut failed = false;
    for err in layout.failures() {
        eprintln!("{}", err);
        failed = true;
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Place the requested fleet with the given random source.
fn run<R: Rng>(options: Options, rng: &mut R) -> FleetLayout<String> {
    place_fleet(options.fleet, &options.config, rng)
}
