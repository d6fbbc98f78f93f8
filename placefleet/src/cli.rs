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
//! Command line arguments.
use clap::{value_t, App, Arg, ArgMatches, Error, ErrorKind};
use once_cell::sync::Lazy;
use regex::Regex;

use fleetgrid::{
    board::BoardSize,
    placement::{PlacementConfig, DEFAULT_MAX_ATTEMPTS},
    ships::{Orientation, ShipSpec, StandardShip},
};

/// Everything needed to run one placement session.
#[derive(Debug)]
pub struct Options {
    /// Board size, attempt budget and allowed orientations.
    pub config: PlacementConfig,
    /// Ships to place, in order.
    pub fleet: Vec<ShipSpec<String>>,
    /// Seed for a reproducible layout. Uses the thread rng when absent.
    pub seed: Option<u64>,
}

/// Default for `--attempts`, kept in step with the library default.
static DEFAULT_ATTEMPTS: Lazy<String> = Lazy::new(|| DEFAULT_MAX_ATTEMPTS.to_string());

/// Build the argument parser.
pub fn app() -> App<'static, 'static> {
    App::new("placefleet")
        .version("0.1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Randomly place a fleet of non-overlapping ships on a square grid.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the board")
                .takes_value(true)
                .default_value("8")
                .validator(positive),
        )
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("ATTEMPTS")
                .help("random positions to try per ship before giving up")
                .takes_value(true)
                .default_value(&DEFAULT_ATTEMPTS)
                .validator(positive),
        )
        .arg(
            Arg::with_name("ship")
                .long("ship")
                .value_name("KIND:LEN")
                .help("ship to place, may be repeated; defaults to the standard fleet")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|value| match parse_ship(&value) {
                    Some(_) => Ok(()),
                    None => Err(format!("expected KIND:LEN with LEN > 0, got {:?}", value)),
                }),
        )
        .arg(
            Arg::with_name("orientation")
                .short("o")
                .long("orientation")
                .value_name("ORIENTATION")
                .help("orientations ships may be placed in")
                .takes_value(true)
                .possible_values(&["both", "horizontal", "h", "vertical", "v"])
                .case_insensitive(true)
                .default_value("both"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random source for a reproducible layout")
                .takes_value(true)
                .validator(|value| {
                    value
                        .parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| err.to_string())
                }),
        )
}

/// Validator for positive integer arguments.
fn positive(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(_) => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}

/// Parse a `KIND:LEN` ship argument.
pub fn parse_ship(arg: &str) -> Option<ShipSpec<String>> {
    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*(?P<kind>[[:alpha:]][\w-]*)\s*:\s*(?P<len>[0-9]+)\s*$").unwrap()
    });
    let captures = SHIP.captures(arg)?;
    let len = captures.name("len")?.as_str().parse().ok()?;
    if len == 0 {
        return None;
    }
    let kind = captures.name("kind")?.as_str().to_ascii_lowercase();
    Some(ShipSpec::new(kind, len))
}

impl Options {
    /// Extract options from parsed arguments, exiting with a usage error if they do not
    /// describe a usable session.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let size = value_t!(matches, "size", usize).unwrap_or_else(|err| err.exit());
        let attempts = value_t!(matches, "attempts", usize).unwrap_or_else(|err| err.exit());
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64).unwrap_or_else(|err| err.exit()))
        } else {
            None
        };
        let orientation = matches
            .value_of("orientation")
            .unwrap_or("both")
            .to_ascii_lowercase();

        let board = BoardSize::try_new(size).unwrap_or_else(|| {
            Error::with_description(
                &format!("board size {} is not supported", size),
                ErrorKind::InvalidValue,
            )
            .exit()
        });
        let config = PlacementConfig::new(board).with_max_attempts(attempts);
        let config = match orientation.as_str() {
            "horizontal" | "h" => config.with_orientations(Orientation::Horizontal),
            "vertical" | "v" => config.with_orientations(Orientation::Vertical),
            _ => config,
        };

        let fleet: Vec<ShipSpec<String>> = match matches.values_of("ship") {
            Some(values) => values.filter_map(parse_ship).collect(),
            None => StandardShip::ALL
                .iter()
                .map(|ship| ShipSpec::new(ship.name().to_string(), ship.len()))
                .collect(),
        };
        for spec in &fleet {
            if spec.len() > size {
                Error::with_description(
                    &format!(
                        "{} of length {} does not fit on a {}x{} board",
                        spec.kind(),
                        spec.len(),
                        size,
                        size
                    ),
                    ErrorKind::InvalidValue,
                )
                .exit();
            }
        }
        if let Err(err) = config.validate() {
            Error::with_description(&err.to_string(), ErrorKind::InvalidValue).exit();
        }

        Options {
            config,
            fleet,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        let matches = app()
            .get_matches_from_safe(std::iter::once("placefleet").chain(args.iter().copied()))
            .unwrap();
        Options::from_matches(&matches)
    }

    #[test]
    fn parse_ship_accepts_kind_and_length() {
        let spec = parse_ship("Carrier:5").unwrap();
        assert_eq!(spec.kind(), "carrier");
        assert_eq!(spec.len(), 5);
        assert_eq!(parse_ship(" pt : 2 ").map(|s| s.len()), Some(2));
        assert!(parse_ship("carrier").is_none());
        assert!(parse_ship("carrier:0").is_none());
        assert!(parse_ship(":3").is_none());
        assert!(parse_ship("5:3").is_none());
    }

    #[test]
    fn defaults_place_standard_fleet() {
        let opts = options(&[]);
        assert_eq!(opts.config, PlacementConfig::default());
        assert_eq!(opts.seed, None);
        let kinds: Vec<&str> = opts.fleet.iter().map(|s| s.kind().as_str()).collect();
        assert_eq!(
            kinds,
            vec!["battleship", "destroyer", "cruiser", "carrier", "submarine"]
        );
        assert_eq!(opts.config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn flags_override_defaults() {
        let opts = options(&[
            "--size",
            "10",
            "-a",
            "25",
            "-o",
            "V",
            "--seed",
            "7",
            "--ship",
            "frigate:3",
            "--ship",
            "pt:2",
        ]);
        assert_eq!(opts.config.board().get(), 10);
        assert_eq!(opts.config.max_attempts(), 25);
        assert!(!opts.config.orientations().contains(Orientation::Horizontal));
        assert_eq!(opts.seed, Some(7));
        assert_eq!(
            opts.fleet,
            vec![
                ShipSpec::new("frigate".to_string(), 3),
                ShipSpec::new("pt".to_string(), 2),
            ]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let parse = |args: &[&str]| {
            app().get_matches_from_safe(
                std::iter::once("placefleet").chain(args.iter().copied()),
            )
        };
        assert!(parse(&["--size", "0"]).is_err());
        assert!(parse(&["--attempts", "none"]).is_err());
        assert!(parse(&["--ship", "carrier"]).is_err());
        assert!(parse(&["--orientation", "diagonal"]).is_err());
        assert!(parse(&["--seed", "-1"]).is_err());
    }
}
