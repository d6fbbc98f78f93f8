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
//! Lookup from ship kind to the single character drawn for it on the board.
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Character drawn for cells no ship covers.
pub const WATER: char = '.';

/// Symbols for the kinds we know about. Keys are lowercase.
static SYMBOLS: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    [
        ("carrier", 'A'),
        ("battleship", 'B'),
        ("cruiser", 'C'),
        ("submarine", 'S'),
        ("destroyer", 'D'),
        ("pt", 'P'),
    ]
    .iter()
    .copied()
    .collect()
});

/// Get the symbol for the given kind. Kinds missing from the table use their first
/// letter, upper-cased.
pub fn symbol(kind: &str) -> char {
    let kind = kind.to_ascii_lowercase();
    match SYMBOLS.get(kind.as_str()) {
        Some(&sym) => sym,
        None => kind
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_use_the_table() {
        assert_eq!(symbol("carrier"), 'A');
        assert_eq!(symbol("Cruiser"), 'C');
        assert_eq!(symbol("PT"), 'P');
    }

    #[test]
    fn unknown_kinds_use_first_letter() {
        assert_eq!(symbol("frigate"), 'F');
        assert_eq!(symbol("x"), 'X');
        assert_eq!(symbol(""), '?');
    }
}
