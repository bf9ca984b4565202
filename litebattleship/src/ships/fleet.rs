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
use std::collections::HashMap;

use crate::{
    board::Coordinate,
    config::Config,
    ships::{Ship, ShipId},
};

/// All the ships belonging to one player, one per configured ship type. Ships are
/// stored in configuration order and addressed by [`ShipId`] or by name.
///
/// Which ship sits on a square is worked out from the ships' own coordinates when it is
/// asked for; the grid only records square statuses.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: Vec<Ship>,
    by_name: HashMap<String, ShipId>,
}

impl Fleet {
    /// Create a fleet of unplaced ships, one for each ship type in the configuration.
    pub fn new(config: &Config) -> Self {
        let ships: Vec<Ship> = config.ships().iter().map(Ship::new).collect();
        let by_name = ships
            .iter()
            .enumerate()
            .map(|(idx, ship)| (ship.name().to_owned(), ShipId(idx)))
            .collect();
        Self { ships, by_name }
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether the fleet has no ships. A validated configuration always has some.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the ID of the ship with the given name.
    pub fn id_of(&self, name: &str) -> Option<ShipId> {
        self.by_name.get(name).copied()
    }

    /// Get a ship by ID.
    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    /// Get a ship by name.
    pub fn by_name(&self, name: &str) -> Option<&Ship> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Get an iterator over all ships and their IDs, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(idx, ship)| (ShipId(idx), ship))
    }

    /// Find the ship occupying the given square, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<ShipId> {
        self.iter()
            .find(|(_, ship)| ship.occupies(coord))
            .map(|(id, _)| id)
    }

    /// Register a hit on every ship that occupies `coord`, returning the first one.
    /// Placement keeps ships from overlapping, so there is at most one.
    pub(crate) fn register_hit(&mut self, coord: Coordinate) -> Option<ShipId> {
        let mut hit = None;
        for (idx, ship) in self.ships.iter_mut().enumerate() {
            if ship.register_hit_if_occupies(coord) && hit.is_none() {
                hit = Some(ShipId(idx));
            }
        }
        hit
    }

    /// Get an iterator over the names of ships that still need to be placed.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.ships
            .iter()
            .filter(|ship| !ship.placed())
            .map(Ship::name)
    }

    /// Whether every ship has been placed.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::placed)
    }

    /// Number of ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|ship| ship.sunk()).count()
    }

    /// Whether every ship in the fleet has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_count() == self.len()
    }
}
