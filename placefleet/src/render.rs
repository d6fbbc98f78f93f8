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
//! Text rendering of a finished layout.
use std::io::{self, Write};

use fleetgrid::board::Grid;

use crate::symbols::{self, WATER};

/// Write the grid with 1-indexed column and row labels, one symbol per cell.
pub fn show_board<W: Write>(grid: &Grid<String>, out: &mut W) -> io::Result<()> {
    let size = grid.size().get();
    write!(out, "   ")?;
    for x in 1..=size {
        write!(out, "{:^3}", x)?;
    }
    writeln!(out)?;
    for (y, row) in grid.rows().enumerate() {
        write!(out, "{:>2} ", y + 1)?;
        for cell in row {
            let sym = cell.map_or(WATER, |kind| symbols::symbol(kind));
            write!(out, "{:^3}", sym)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fleetgrid::{
        board::{BoardSize, Coordinate},
        ships::{Orientation, Ship},
    };

    use super::*;

    #[test]
    fn renders_labels_and_symbols() {
        let ships = vec![
            Ship::line(
                "destroyer".to_string(),
                Coordinate::new(1, 1),
                2,
                Orientation::Horizontal,
            ),
            Ship::line(
                "pt".to_string(),
                Coordinate::new(3, 2),
                2,
                Orientation::Vertical,
            ),
        ];
        let grid = Grid::from_ships(BoardSize::new(3), &ships).unwrap();
        let mut out = Vec::new();
        show_board(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    1  2  3 ");
        assert_eq!(lines[1], " 1  D  D  . ");
        assert_eq!(lines[2], " 2  .  .  P ");
        assert_eq!(lines[3], " 3  .  .  P ");
    }
}
