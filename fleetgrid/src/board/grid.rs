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
//! Occupancy grid that materializes a set of placed ships into cells.

use std::{borrow::Borrow, ops::Index};

use crate::{
    board::{BoardSize, CannotOccupyReason, Coordinate, OccupyError},
    ships::{Ship, ShipId},
};

/// Square grid recording which ship, if any, covers each cell.
#[derive(Debug, Clone)]
pub struct Grid<I> {
    /// Size of the board.
    size: BoardSize,
    /// Row-major cells. Each cell holds the kind of the ship that covers it.
    cells: Box<[Option<I>]>,
}

impl<I: ShipId> Grid<I> {
    /// Construct an empty grid for a board of the given size.
    pub fn new(size: BoardSize) -> Self {
        let cells = (0..size.total_size()).map(|_| None).collect();
        Self { size, cells }
    }

    /// Build a grid holding all of the given ships. Fails on the first ship that leaves
    /// the board or covers a cell that an earlier ship already covers.
    pub fn from_ships<'a, S>(size: BoardSize, ships: S) -> Result<Self, OccupyError>
    where
        S: IntoIterator<Item = &'a Ship<I>>,
        I: 'a,
    {
        let mut grid = Self::new(size);
        for ship in ships {
            grid.occupy(ship)?;
        }
        Ok(grid)
    }

    /// Get the size of the board this grid covers.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Get a reference to the cell at the given [`Coordinate`]. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Option<I>> {
        self.size
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get the kind of ship covering the given cell, if any.
    pub fn kind_at<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&I> {
        self.get(coord).and_then(Option::as_ref)
    }

    /// Write the ship into the grid. If any of its cells is out of bounds or already
    /// occupied, the grid is left unchanged.
    pub fn occupy(&mut self, ship: &Ship<I>) -> Result<(), OccupyError> {
        for coord in ship.cells() {
            match self.get(coord) {
                None => return Err(OccupyError::new(CannotOccupyReason::OutOfBounds, coord)),
                Some(Some(_)) => return Err(OccupyError::new(CannotOccupyReason::Occupied, coord)),
                Some(None) => {}
            }
        }
        // Every cell was checked above, so linearize always succeeds here.
        for coord in ship.cells() {
            if let Some(i) = self.size.try_linearize(&coord) {
                self.cells[i] = Some(ship.kind().clone());
            }
        }
        Ok(())
    }

    /// Number of cells covered by some ship.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get an iterator over the rows of the grid, top to bottom. Each row is an iterator
    /// over the cells of that row, left to right.
    pub fn rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<&'a I>>> {
        self.size
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self.kind_at(coord)))
    }
}

impl<I: ShipId, B: Borrow<Coordinate>> Index<B> for Grid<I> {
    type Output = Option<I>;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn line(
        kind: &'static str,
        x: usize,
        y: usize,
        len: usize,
        dir: Orientation,
    ) -> Ship<&'static str> {
        Ship::line(kind, Coordinate::new(x, y), len, dir)
    }

    #[test]
    fn occupy_marks_every_cell() {
        let mut grid = Grid::new(BoardSize::new(8));
        grid.occupy(&line("carrier", 2, 2, 5, Orientation::Horizontal))
            .unwrap();
        grid.occupy(&line("battleship", 8, 3, 4, Orientation::Vertical))
            .unwrap();
        assert_eq!(grid.occupied(), 9);
        assert_eq!(grid.kind_at(Coordinate::new(6, 2)), Some(&"carrier"));
        assert_eq!(grid.kind_at(Coordinate::new(7, 2)), None);
        assert_eq!(grid[Coordinate::new(8, 6)], Some("battleship"));
    }

    #[test]
    fn overlapping_ship_leaves_grid_unchanged() {
        let mut grid = Grid::new(BoardSize::new(8));
        grid.occupy(&line("cruiser", 6, 4, 3, Orientation::Horizontal))
            .unwrap();
        let err = grid
            .occupy(&line("battleship", 8, 3, 4, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotOccupyReason::Occupied);
        assert_eq!(err.coord(), Coordinate::new(8, 4));
        assert_eq!(grid.occupied(), 3);
        assert_eq!(grid.kind_at(Coordinate::new(8, 3)), None);
    }

    #[test]
    fn out_of_bounds_ship_is_rejected() {
        let mut grid = Grid::new(BoardSize::new(4));
        let err = grid
            .occupy(&line("carrier", 1, 1, 5, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotOccupyReason::OutOfBounds);
        assert_eq!(err.coord(), Coordinate::new(5, 1));
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn from_ships_stops_at_first_collision() {
        let ships = vec![
            line("cruiser", 4, 5, 3, Orientation::Horizontal),
            line("pt", 4, 5, 3, Orientation::Vertical),
        ];
        let err = Grid::from_ships(BoardSize::new(8), &ships).unwrap_err();
        assert_eq!(err.coord(), Coordinate::new(4, 5));

        let grid = Grid::from_ships(BoardSize::new(8), &ships[..1]).unwrap();
        assert_eq!(grid.occupied(), 3);
    }

    #[test]
    fn rows_follow_board_order() {
        let grid = Grid::from_ships(
            BoardSize::new(3),
            &[line("destroyer", 2, 3, 2, Orientation::Horizontal)],
        )
        .unwrap();
        let rows: Vec<Vec<Option<&&str>>> = grid.rows().map(|r| r.collect()).collect();
        assert_eq!(rows[0], vec![None, None, None]);
        assert_eq!(rows[2], vec![None, Some(&"destroyer"), Some(&"destroyer")]);
    }
}
