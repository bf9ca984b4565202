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
/// The position of a square in the grid as zero-based row and column indexes.
///
/// Coordinates are only handed out by [`Dimensions`][crate::board::Dimensions], either
/// by parsing text or by stepping from another coordinate, so a `Coordinate` is always
/// in bounds for the grid that produced it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Index into the row labels.
    row: usize,
    /// Index into the column labels.
    col: usize,
}

impl Coordinate {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the row label.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Index of the column label.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
