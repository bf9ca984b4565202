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
//! Ships and the fleet that holds them.
use log::info;

use crate::{
    board::Coordinate,
    config::{Config, ConfigError, ShipType},
};

pub use self::{
    fleet::Fleet,
    linear::{Orientation, ParseOrientationError},
};

mod fleet;
mod linear;

/// Identifies a ship within one player's [`Fleet`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub(crate) usize);

/// Whether a ship is still afloat.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShipStatus {
    Safe,
    Sunk,
}

/// A named ship of fixed size. Starts out unplaced; the placement engine records its
/// orientation and the squares it occupies, prow first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    name: String,
    size: usize,
    orientation: Orientation,
    /// Occupied squares, prow first. Never longer than `size`.
    coords: Vec<Coordinate>,
    hits: usize,
    status: ShipStatus,
}

impl Ship {
    /// Create an unplaced ship of the given type.
    pub fn new(ship_type: &ShipType) -> Self {
        Self {
            name: ship_type.name().to_owned(),
            size: ship_type.size(),
            orientation: Orientation::default(),
            coords: Vec::with_capacity(ship_type.size()),
            hits: 0,
            status: ShipStatus::Safe,
        }
    }

    /// Create an unplaced ship by looking its size up in the configuration.
    pub fn from_config(config: &Config, name: &str) -> Result<Self, ConfigError> {
        let size = config.ship_size(name)?;
        Ok(Self::new(&ShipType::new(name, size)))
    }

    /// Name of this ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of squares this ship occupies once placed.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Direction the ship extends in from its prow.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Squares this ship occupies, prow first.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// The first square of the ship, if it has been placed.
    pub fn prow(&self) -> Option<Coordinate> {
        self.coords.first().copied()
    }

    /// Whether this ship occupies the given square.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Whether every square of the ship has been placed.
    pub fn placed(&self) -> bool {
        self.coords.len() == self.size
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Whether the ship is still afloat.
    pub fn status(&self) -> ShipStatus {
        self.status
    }

    /// Shorthand for `status() == ShipStatus::Sunk`.
    pub fn sunk(&self) -> bool {
        self.status == ShipStatus::Sunk
    }

    /// Append a square to the ship. Does not check whether the square is free; the
    /// placement engine checks that against the grid. Returns `false` and changes
    /// nothing if the ship already occupies `size` squares.
    pub fn add_coordinate(&mut self, coord: Coordinate) -> bool {
        if self.coords.len() < self.size {
            self.coords.push(coord);
            true
        } else {
            false
        }
    }

    /// Remove every square from the ship, returning them prow first.
    pub(crate) fn clear_coordinates(&mut self) -> Vec<Coordinate> {
        std::mem::take(&mut self.coords)
    }

    /// Count one hit. The ship sinks when its hits reach its size and stays sunk.
    /// Each confirmed hit square must be registered exactly once; this does not
    /// deduplicate.
    pub fn register_hit(&mut self) {
        self.hits += 1;
        if self.hits == self.size {
            info!("{} has been sunk", self.name);
            self.status = ShipStatus::Sunk;
        }
    }

    /// Register a hit only if the ship occupies `coord`. Returns whether it did.
    pub fn register_hit_if_occupies(&mut self, coord: Coordinate) -> bool {
        let hit = self.occupies(coord);
        if hit {
            self.register_hit();
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destroyer() -> Ship {
        Ship::new(&ShipType::new("Destroyer", 2))
    }

    #[test]
    fn new_ship_is_unplaced_and_safe() {
        let ship = destroyer();
        assert_eq!(ship.size(), 2);
        assert_eq!(ship.orientation(), Orientation::Down);
        assert!(ship.coords().is_empty());
        assert_eq!(ship.prow(), None);
        assert_eq!(ship.status(), ShipStatus::Safe);
    }

    #[test]
    fn from_config_looks_up_size() {
        let config = Config::classic();
        assert_eq!(Ship::from_config(&config, "Battleship").unwrap().size(), 4);
        assert_eq!(
            Ship::from_config(&config, "Dinghy"),
            Err(ConfigError::UnknownShipName("Dinghy".to_owned()))
        );
    }

    #[test]
    fn never_holds_more_than_size() {
        let mut ship = destroyer();
        assert!(ship.add_coordinate(Coordinate::new(0, 0)));
        assert!(ship.add_coordinate(Coordinate::new(0, 1)));
        assert!(!ship.add_coordinate(Coordinate::new(0, 2)));
        assert_eq!(ship.coords().len(), 2);
        assert!(ship.placed());
        assert_eq!(ship.prow(), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn sinks_on_last_hit_and_stays_sunk() {
        let mut ship = destroyer();
        ship.register_hit();
        assert_eq!(ship.status(), ShipStatus::Safe);
        ship.register_hit();
        assert_eq!(ship.status(), ShipStatus::Sunk);
        ship.register_hit();
        assert_eq!(ship.hits(), 3);
        assert!(ship.sunk());
    }

    #[test]
    fn hit_if_occupies() {
        let mut ship = destroyer();
        ship.add_coordinate(Coordinate::new(1, 1));
        assert!(!ship.register_hit_if_occupies(Coordinate::new(2, 2)));
        assert_eq!(ship.hits(), 0);
        assert!(ship.register_hit_if_occupies(Coordinate::new(1, 1)));
        assert_eq!(ship.hits(), 1);
    }
}
