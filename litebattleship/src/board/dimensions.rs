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
//! Grid labels and the coordinate codec.
use std::{collections::HashSet, fmt};

use crate::{
    board::{Coordinate, CoordinateError},
    config::{col_labels, generate_rows, ConfigError},
    ships::Orientation,
};

/// Row labels longer than this many entries use two characters.
const SINGLE_LETTER_ROWS: usize = 26;

/// The ordered row and column labels of a grid. Converts between the textual form of a
/// coordinate, such as `"D3"`, and [`Coordinate`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Labels for each row, top to bottom.
    rows: Vec<String>,
    /// Labels for each column, left to right.
    cols: Vec<String>,
}

impl Dimensions {
    /// Validate the labels so that every label can be produced by [`parse`][Self::parse].
    pub(crate) fn new(rows: Vec<String>, cols: Vec<String>) -> Result<Self, ConfigError> {
        if rows.is_empty() {
            return Err(ConfigError::NoRows);
        }
        if cols.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let width = row_label_width(rows.len());
        for row in &rows {
            if row.chars().count() != width || row.to_uppercase() != *row {
                return Err(ConfigError::InvalidRowLabel(row.clone(), width));
            }
        }
        check_unique(&rows)?;
        for col in &cols {
            if col.is_empty() || col.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidColumnLabel(col.clone()));
            }
        }
        check_unique(&cols)?;
        Ok(Self { rows, cols })
    }

    /// Generated labels for a grid known to be small enough.
    pub(crate) fn generated(height: usize, width: usize) -> Self {
        Self {
            rows: generate_rows(height),
            cols: col_labels(width),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cols.len()
    }

    /// Total number of squares.
    pub fn total_size(&self) -> usize {
        self.height() * self.width()
    }

    /// Row labels, top to bottom.
    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    /// Column labels, left to right.
    pub fn col_labels(&self) -> &[String] {
        &self.cols
    }

    /// An example of a valid coordinate for grids of this height, used in error
    /// messages.
    pub fn example(&self) -> &'static str {
        if self.height() > SINGLE_LETTER_ROWS {
            "AC24"
        } else {
            "D3"
        }
    }

    /// Parse a coordinate such as `"d3"` or `"AC24"`.
    ///
    /// The row part is the first character, or the first two when the grid has more
    /// than 26 rows, and is matched case-insensitively. The rest of the text must be
    /// a column label. Surrounding whitespace is ignored.
    pub fn parse(&self, raw: &str) -> Result<Coordinate, CoordinateError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CoordinateError::Blank);
        }
        let invalid = || CoordinateError::Invalid {
            example: self.example(),
        };
        let split = raw
            .char_indices()
            .nth(row_label_width(self.height()))
            .map(|(idx, _)| idx)
            .ok_or_else(invalid)?;
        let (row, col) = raw.split_at(split);
        let row = row.to_uppercase();
        match (
            self.rows.iter().position(|label| *label == row),
            self.cols.iter().position(|label| label == col),
        ) {
            (Some(row), Some(col)) => Ok(Coordinate::new(row, col)),
            _ => Err(invalid()),
        }
    }

    /// Get the coordinate at the given indexes, if it is in bounds.
    pub fn coordinate(&self, row: usize, col: usize) -> Option<Coordinate> {
        if row < self.height() && col < self.width() {
            Some(Coordinate::new(row, col))
        } else {
            None
        }
    }

    /// The canonical text of a coordinate: row label followed by column label.
    pub fn canonical(&self, coord: Coordinate) -> String {
        self.label(coord).to_string()
    }

    /// Display helper that writes the canonical text of a coordinate.
    pub fn label(&self, coord: Coordinate) -> Label {
        Label { dim: self, coord }
    }

    /// Step `distance` squares from `coord` along `orientation`. `Down` and `Right`
    /// move towards higher indexes, `Up` and `Left` towards lower ones. Returns `None`
    /// if the result would be off the grid.
    pub fn offset(
        &self,
        coord: Coordinate,
        orientation: Orientation,
        distance: usize,
    ) -> Option<Coordinate> {
        let (row, col): (usize, usize) = coord.into();
        match orientation {
            Orientation::Down => self.coordinate(row.checked_add(distance)?, col),
            Orientation::Up => self.coordinate(row.checked_sub(distance)?, col),
            Orientation::Right => self.coordinate(row, col.checked_add(distance)?),
            Orientation::Left => self.coordinate(row, col.checked_sub(distance)?),
        }
    }

    /// Convert a coordinate to its index in row-major storage.
    pub(crate) fn linearize(&self, coord: Coordinate) -> usize {
        coord.row() * self.width() + coord.col()
    }

    /// Convert an index in row-major storage back into a coordinate.
    pub(crate) fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.width(), idx % self.width())
    }

    /// Get an iterator over all coordinates in row-major order.
    pub fn coordinates(&self) -> impl '_ + Iterator<Item = Coordinate> {
        (0..self.total_size()).map(move |idx| self.un_linearize(idx))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width();
        (0..self.height()).map(move |row| (0..width).map(move |col| Coordinate::new(row, col)))
    }
}

/// Number of characters in each row label for a grid with `rows` rows.
fn row_label_width(rows: usize) -> usize {
    if rows > SINGLE_LETTER_ROWS {
        2
    } else {
        1
    }
}

fn check_unique(labels: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(labels.len());
    match labels.iter().find(|label| !seen.insert(label.as_str())) {
        Some(dup) => Err(ConfigError::DuplicateLabel(dup.clone())),
        None => Ok(()),
    }
}

/// Writes the canonical text of a [`Coordinate`].
#[derive(Debug, Copy, Clone)]
pub struct Label<'a> {
    dim: &'a Dimensions,
    coord: Coordinate,
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.dim.rows[self.coord.row()], self.dim.cols[self.coord.col()]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dimensions {
        Dimensions::generated(5, 5)
    }

    #[test]
    fn parse_upper_cases_row() {
        let dim = small();
        let coord = dim.parse("d3").unwrap();
        assert_eq!((coord.row(), coord.col()), (3, 2));
        assert_eq!(dim.canonical(coord), "D3");
        assert_eq!(dim.parse(" B5 ").unwrap(), Coordinate::new(1, 4));
    }

    #[test]
    fn parse_blank() {
        let dim = small();
        assert_eq!(dim.parse(""), Err(CoordinateError::Blank));
        assert_eq!(dim.parse(" \t "), Err(CoordinateError::Blank));
    }

    #[test]
    fn parse_invalid() {
        let dim = small();
        let invalid = Err(CoordinateError::Invalid { example: "D3" });
        assert_eq!(dim.parse("Z9"), invalid);
        assert_eq!(dim.parse("A"), invalid);
        assert_eq!(dim.parse("A6"), invalid);
        assert_eq!(dim.parse("A01"), invalid);
        assert_eq!(dim.parse("1A"), invalid);
    }

    #[test]
    fn parse_two_letter_rows() {
        let dim = Dimensions::generated(30, 30);
        let coord = dim.parse("ac24").unwrap();
        assert_eq!((coord.row(), coord.col()), (2, 23));
        assert_eq!(dim.canonical(coord), "AC24");
        assert_eq!(
            dim.parse("C24"),
            Err(CoordinateError::Invalid { example: "AC24" })
        );
    }

    #[test]
    fn parse_multibyte_input() {
        let dim = small();
        assert_eq!(
            dim.parse("É3"),
            Err(CoordinateError::Invalid { example: "D3" })
        );
    }

    #[test]
    fn offset_stays_in_bounds() {
        let dim = small();
        let a1 = dim.parse("A1").unwrap();
        assert_eq!(dim.offset(a1, Orientation::Up, 1), None);
        assert_eq!(dim.offset(a1, Orientation::Left, 1), None);
        assert_eq!(dim.offset(a1, Orientation::Down, 4), dim.parse("E1").ok());
        assert_eq!(dim.offset(a1, Orientation::Right, 5), None);
    }

    #[test]
    fn rows_of_coordinates() {
        let dim = Dimensions::generated(2, 3);
        let rows: Vec<Vec<String>> = dim
            .iter_coordinates()
            .map(|row| row.map(|c| dim.canonical(c)).collect())
            .collect();
        assert_eq!(rows, vec![vec!["A1", "A2", "A3"], vec!["B1", "B2", "B3"]]);
        assert_eq!(dim.coordinates().count(), 6);
    }
}
