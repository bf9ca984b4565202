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
//! Game configuration. A [`Config`] is built once, validated up front, and then only
//! ever borrowed.
use std::collections::HashSet;

use enumflags2::BitFlags;
use thiserror::Error;

use crate::board::{Dimensions, SquareStatus};

/// Largest number of rows that can be labelled with two letters.
const MAX_ROWS: usize = 26 * 26;

/// Error found while validating a [`Config`]. These indicate a programming or
/// configuration defect and are never recoverable by re-prompting.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// No row labels were given.
    #[error("the grid must have at least one row")]
    NoRows,
    /// No column labels were given.
    #[error("the grid must have at least one column")]
    NoColumns,
    /// A label appears twice on the same axis.
    #[error("label {0:?} is used more than once")]
    DuplicateLabel(String),
    /// A row label cannot be produced by the coordinate codec.
    #[error("row label {0:?} must be {1} upper-case character(s) wide")]
    InvalidRowLabel(String, usize),
    /// A column label is empty or contains whitespace.
    #[error("column label {0:?} must be non-empty and contain no whitespace")]
    InvalidColumnLabel(String),
    /// More rows were requested than two-letter labels can name.
    #[error("{0} rows requested but at most {} are supported", MAX_ROWS)]
    GridTooLarge(usize),
    /// The game needs at least two players.
    #[error("at least two players are required, got {0}")]
    TooFewPlayers(usize),
    /// The ship table is empty.
    #[error("at least one ship is required")]
    NoShips,
    /// A ship was given an empty name.
    #[error("ship names must not be blank")]
    BlankShipName,
    /// Two ships share a name.
    #[error("ship {0:?} is configured more than once")]
    DuplicateShip(String),
    /// A ship has size zero.
    #[error("ship {0:?} must occupy at least one square")]
    ZeroSizeShip(String),
    /// A ship is longer than both axes of the grid and could never be placed.
    #[error("ship {name:?} of size {size} does not fit in the grid")]
    ShipTooLarge { name: String, size: usize },
    /// A ship name was looked up that is not in the ship table.
    #[error("no ship named {0:?} is configured")]
    UnknownShipName(String),
}

/// Name and size of one type of ship in the fleet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipType {
    name: String,
    size: usize,
}

impl ShipType {
    /// Create a ship type with the given name and size.
    pub fn new<N: Into<String>>(name: N, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Name of the ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of squares the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Text shown for each kind of square.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Markers {
    pub ship: String,
    pub hit: String,
    pub miss: String,
    pub blank: String,
}

impl Markers {
    /// Marker for the given status, ignoring visibility.
    pub fn marker(&self, status: SquareStatus) -> &str {
        match status {
            SquareStatus::Empty => &self.blank,
            SquareStatus::Ship => &self.ship,
            SquareStatus::Hit => &self.hit,
            SquareStatus::Miss => &self.miss,
        }
    }

    /// Marker for the given status if it is in the `visible` set, otherwise the blank
    /// marker. The caller decides which statuses are visible in which mode.
    pub fn glyph<B: Into<BitFlags<SquareStatus>>>(&self, status: SquareStatus, visible: B) -> &str {
        if visible.into().contains(status) {
            self.marker(status)
        } else {
            &self.blank
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            ship: "X".to_owned(),
            hit: "X".to_owned(),
            miss: "O".to_owned(),
            blank: " ".to_owned(),
        }
    }
}

/// Complete description of a game: grid labels, number of players, the fleet each
/// player gets, and the markers used to draw squares.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    dim: Dimensions,
    players: usize,
    ships: Vec<ShipType>,
    markers: Markers,
}

impl Config {
    /// Build a configuration from explicit labels. Row labels must all be one
    /// upper-case character wide, or two when there are more than 26 rows.
    pub fn new<R, C>(
        rows: R,
        cols: C,
        players: usize,
        ships: Vec<ShipType>,
    ) -> Result<Self, ConfigError>
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let dim = Dimensions::new(
            rows.into_iter().map(Into::into).collect(),
            cols.into_iter().map(Into::into).collect(),
        )?;
        if players < 2 {
            return Err(ConfigError::TooFewPlayers(players));
        }
        check_ships(&ships, &dim)?;
        Ok(Self {
            dim,
            players,
            ships,
            markers: Markers::default(),
        })
    }

    /// Build a two-player configuration with generated labels: `A`, `B`, ... for rows
    /// (`AA`, `AB`, ... past 26 rows) and `1`, `2`, ... for columns.
    pub fn sized(height: usize, width: usize, ships: Vec<ShipType>) -> Result<Self, ConfigError> {
        Self::new(row_labels(height)?, col_labels(width), 2, ships)
    }

    /// The standard 10x10 game with Carrier 5, Battleship 4, Cruiser 3, Submarine 3 and
    /// Destroyer 2.
    pub fn classic() -> Self {
        Self {
            dim: Dimensions::generated(10, 10),
            players: 2,
            ships: vec![
                ShipType::new("Carrier", 5),
                ShipType::new("Battleship", 4),
                ShipType::new("Cruiser", 3),
                ShipType::new("Submarine", 3),
                ShipType::new("Destroyer", 2),
            ],
            markers: Markers::default(),
        }
    }

    /// Replace the markers used to draw squares.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Row and column labels of the grid, along with the coordinate codec.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Number of players in a match.
    pub fn players(&self) -> usize {
        self.players
    }

    /// Ships every player gets, in placement order.
    pub fn ships(&self) -> &[ShipType] {
        &self.ships
    }

    /// Look up the size of the ship with the given name.
    pub fn ship_size(&self, name: &str) -> Result<usize, ConfigError> {
        self.ships
            .iter()
            .find(|ship| ship.name == name)
            .map(ShipType::size)
            .ok_or_else(|| ConfigError::UnknownShipName(name.to_owned()))
    }

    /// Markers used to draw squares.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }
}

impl Default for Config {
    /// The small game: a 5x5 grid with two players and five small ships.
    fn default() -> Self {
        Self {
            dim: Dimensions::generated(5, 5),
            players: 2,
            ships: vec![
                ShipType::new("Carrier", 2),
                ShipType::new("Battleship", 2),
                ShipType::new("Cruiser", 1),
                ShipType::new("Submarine", 1),
                ShipType::new("Destroyer", 1),
            ],
            markers: Markers::default(),
        }
    }
}

fn check_ships(ships: &[ShipType], dim: &Dimensions) -> Result<(), ConfigError> {
    if ships.is_empty() {
        return Err(ConfigError::NoShips);
    }
    let longest = dim.height().max(dim.width());
    let mut seen = HashSet::with_capacity(ships.len());
    for ship in ships {
        if ship.name.trim().is_empty() {
            return Err(ConfigError::BlankShipName);
        }
        if !seen.insert(ship.name.as_str()) {
            return Err(ConfigError::DuplicateShip(ship.name.clone()));
        }
        if ship.size == 0 {
            return Err(ConfigError::ZeroSizeShip(ship.name.clone()));
        }
        if ship.size > longest {
            return Err(ConfigError::ShipTooLarge {
                name: ship.name.clone(),
                size: ship.size,
            });
        }
    }
    Ok(())
}

/// Generate `count` row labels: single letters up to 26 rows, two letters beyond.
pub fn row_labels(count: usize) -> Result<Vec<String>, ConfigError> {
    if count > MAX_ROWS {
        Err(ConfigError::GridTooLarge(count))
    } else {
        Ok(generate_rows(count))
    }
}

/// Generates row labels without checking that two letters are enough.
pub(crate) fn generate_rows(count: usize) -> Vec<String> {
    let letter = |i: usize| char::from(b'A' + i as u8);
    if count <= 26 {
        (0..count).map(|i| letter(i).to_string()).collect()
    } else {
        (0..count)
            .map(|i| [letter(i / 26), letter(i % 26)].iter().collect())
            .collect()
    }
}

/// Generate `count` column labels, numbered from 1.
pub fn col_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| i.to_string()).collect()
}
