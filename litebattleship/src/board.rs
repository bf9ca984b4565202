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
//! Types that make up a player's board: the grid of squares and the fleet on it.
use log::debug;

use crate::{
    config::Config,
    ships::{Fleet, Ship, ShipId},
};

pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, Label},
    errors::{
        CannotPlaceReason, CannotShootReason, CoordinateError, PlaceError, ShotError,
    },
    grid::{Grid, SquareStatus},
};
pub use enumflags2::BitFlags;

mod coordinate;
mod dimensions;
mod errors;
mod grid;
#[cfg(feature = "rng_gen")]
mod random;
mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The shot sank the ship with the given ID, but the player has more ships left.
    Sunk(ShipId),
    /// The shot sank the ship with the given ID, and all of the player's ships are now
    /// sunk.
    Defeated(ShipId),
}

impl ShotOutcome {
    /// Whether the shot landed on a ship.
    pub fn is_hit(&self) -> bool {
        self.ship().is_some()
    }

    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) | ShotOutcome::Defeated(id) => {
                Some(id)
            }
        }
    }
}

/// Shots landed on a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Score {
    /// Shots that hit a ship.
    pub hits: usize,
    /// All shots, hits and misses.
    pub shots: usize,
}

/// A single player's board: their grid and the fleet placed on it.
#[derive(Debug, Clone)]
pub struct Board<'c> {
    /// Status of every square.
    grid: Grid<'c>,

    /// Ships, placed or not.
    fleet: Fleet,
}

impl<'c> Board<'c> {
    /// Create an empty board with one unplaced ship of each configured type.
    pub fn new(config: &'c Config) -> Self {
        Self {
            grid: Grid::new(config.dimensions()),
            fleet: Fleet::new(config),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &'c Dimensions {
        self.grid.dimensions()
    }

    /// The status of every square.
    pub fn grid(&self) -> &Grid<'c> {
        &self.grid
    }

    /// The ships on this board.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Get the ship with the specified ID.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id)
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn defeated(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Count the hits and total shots that have landed on this board.
    pub fn tally(&self) -> Score {
        Score {
            hits: self.grid.count(SquareStatus::Hit),
            shots: self.grid.count(SquareStatus::shot()),
        }
    }

    /// Fire a shot at this board. Fails without changing anything if the coordinate
    /// is invalid or the square was already shot.
    pub fn shoot(&mut self, raw: &str) -> Result<ShotOutcome, ShotError> {
        let coord = self
            .dimensions()
            .parse(raw)
            .map_err(|err| ShotError::new(err.into(), raw))?;
        let label = self.dimensions().label(coord);
        match self.grid[coord] {
            status if status.is_shot() => {
                Err(ShotError::new(CannotShootReason::AlreadyShot, raw))
            }
            SquareStatus::Ship => {
                self.grid[coord] = SquareStatus::Hit;
                let outcome = match self.fleet.register_hit(coord) {
                    Some(id) if self.defeated() => ShotOutcome::Defeated(id),
                    Some(id) if self.fleet.get(id).map_or(false, Ship::sunk) => {
                        ShotOutcome::Sunk(id)
                    }
                    Some(id) => ShotOutcome::Hit(id),
                    // Placement records an owner for every ship square.
                    None => ShotOutcome::Miss,
                };
                debug!("shot at {} hit: {:?}", label, outcome);
                Ok(outcome)
            }
            _ => {
                self.grid[coord] = SquareStatus::Miss;
                debug!("shot at {} missed", label);
                Ok(ShotOutcome::Miss)
            }
        }
    }
}
