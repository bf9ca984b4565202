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
//! The per-square status map owned by each player's board.

use std::ops::{Index, IndexMut};

use enumflags2::BitFlags;

use crate::board::{Coordinate, CoordinateError, Dimensions};

/// Status of a single square in a player's grid.
///
/// This is a flag type so that callers can talk about sets of statuses, for example
/// the statuses a renderer is willing to reveal.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum SquareStatus {
    /// Nothing has been placed or shot here.
    Empty = 0b0001,
    /// Part of a ship that has not been shot.
    Ship = 0b0010,
    /// Part of a ship that has been shot.
    Hit = 0b0100,
    /// A shot that landed in open water.
    Miss = 0b1000,
}

impl SquareStatus {
    /// The statuses of squares that have already been shot.
    pub fn shot() -> BitFlags<SquareStatus> {
        BitFlags::from(SquareStatus::Hit) | SquareStatus::Miss
    }

    /// Whether a shot has already landed on this square.
    pub fn is_shot(self) -> bool {
        Self::shot().contains(self)
    }
}

impl Default for SquareStatus {
    fn default() -> Self {
        SquareStatus::Empty
    }
}

/// Status of every square in one player's grid. Every coordinate of the
/// [`Dimensions`] has an entry from construction onwards.
#[derive(Debug, Clone)]
pub struct Grid<'c> {
    /// Dimensions of this grid.
    dim: &'c Dimensions,
    /// Squares in row-major order.
    cells: Box<[SquareStatus]>,
}

impl<'c> Grid<'c> {
    /// Create a grid where every square is [`SquareStatus::Empty`].
    pub fn new(dim: &'c Dimensions) -> Self {
        let cells = vec![SquareStatus::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &'c Dimensions {
        self.dim
    }

    /// Get the status of the square named by `raw`.
    pub fn get(&self, raw: &str) -> Result<SquareStatus, CoordinateError> {
        self.dim.parse(raw).map(|coord| self[coord])
    }

    /// Overwrite the status of the square named by `raw`, returning its coordinate.
    pub fn set(&mut self, raw: &str, status: SquareStatus) -> Result<Coordinate, CoordinateError> {
        let coord = self.dim.parse(raw)?;
        self[coord] = status;
        Ok(coord)
    }

    /// Get the status at a coordinate. Returns `None` if the coordinate is out of bounds,
    /// which can only happen with a coordinate from a larger grid.
    pub fn status(&self, coord: Coordinate) -> Option<SquareStatus> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    /// Position of a coordinate in `cells`, if it is in bounds.
    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        self.dim
            .coordinate(coord.row(), coord.col())
            .map(|coord| self.dim.linearize(coord))
    }

    /// Get an iterator over every coordinate and its status in row-major order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Coordinate, SquareStatus)> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, status)| (dim.un_linearize(idx), *status))
    }

    /// Count the squares whose status is in `statuses`.
    pub fn count<B: Into<BitFlags<SquareStatus>>>(&self, statuses: B) -> usize {
        let statuses = statuses.into();
        self.cells
            .iter()
            .filter(|status| statuses.contains(**status))
            .count()
    }
}

impl Index<Coordinate> for Grid<'_> {
    type Output = SquareStatus;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        let idx = self.index_of(coord).expect("coordinate out of bounds");
        &self.cells[idx]
    }
}

impl IndexMut<Coordinate> for Grid<'_> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let idx = self.index_of(coord).expect("coordinate out of bounds");
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let dim = Dimensions::generated(5, 5);
        let grid = Grid::new(&dim);
        assert_eq!(grid.iter().count(), 25);
        assert!(grid.iter().all(|(_, status)| status == SquareStatus::Empty));
        assert_eq!(grid.count(SquareStatus::Empty), 25);
    }

    #[test]
    fn set_only_touches_one_square() {
        let dim = Dimensions::generated(5, 5);
        let mut grid = Grid::new(&dim);
        let coord = grid.set("c4", SquareStatus::Ship).unwrap();
        assert_eq!(dim.canonical(coord), "C4");
        assert_eq!(grid.get("C4"), Ok(SquareStatus::Ship));
        assert_eq!(grid[coord], SquareStatus::Ship);
        assert_eq!(grid.count(SquareStatus::Ship), 1);
        assert_eq!(grid.count(SquareStatus::Empty), 24);
    }

    #[test]
    fn bad_coordinates_propagate() {
        let dim = Dimensions::generated(5, 5);
        let mut grid = Grid::new(&dim);
        assert_eq!(grid.get(""), Err(CoordinateError::Blank));
        assert_eq!(
            grid.set("F1", SquareStatus::Miss),
            Err(CoordinateError::Invalid { example: "D3" })
        );
        assert_eq!(grid.count(SquareStatus::Miss), 0);
    }

    #[test]
    fn status_checks_bounds() {
        let big = Dimensions::generated(8, 8);
        let dim = Dimensions::generated(5, 5);
        let grid = Grid::new(&dim);
        assert_eq!(grid.status(big.parse("H8").unwrap()), None);
        assert_eq!(
            grid.status(dim.parse("E5").unwrap()),
            Some(SquareStatus::Empty)
        );
    }

    #[test]
    fn shot_statuses() {
        assert!(SquareStatus::Hit.is_shot());
        assert!(SquareStatus::Miss.is_shot());
        assert!(!SquareStatus::Ship.is_shot());
        assert!(!SquareStatus::Empty.is_shot());
    }
}
