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
//! Errors used by the [`Board`][crate::board::Board] and its [`Grid`][crate::board::Grid].

use std::fmt::{self, Debug};

use thiserror::Error;

/// Reason why text could not be turned into a coordinate.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CoordinateError {
    /// Nothing, or only whitespace, was entered.
    #[error("no coordinate was entered")]
    Blank,
    /// The text does not name a square in the grid. Carries an example of the format
    /// that the grid accepts.
    #[error("that is not a valid coordinate in the grid, enter one in the form '{example}'")]
    Invalid { example: &'static str },
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The prow coordinate was blank or invalid.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    /// One of the squares the ship needs is already occupied. Carries the canonical
    /// coordinate of that square.
    #[error("there is already a ship at {0}")]
    AlreadyFilled(String),
    /// The ship would extend past the edge of the grid.
    #[error("the ship cannot fit in the grid at that location and orientation")]
    TooCloseToEdge,
    /// The ship was already placed and must be unplaced first.
    #[error("the ship was already placed")]
    AlreadyPlaced,
    /// No ship with the given name is in the fleet.
    #[error("no ship with that name is in the fleet")]
    UnknownShip,
    /// The player to place the ship for is not in the match.
    #[error("no such player")]
    UnknownPlayer,
}

impl CannotPlaceReason {
    /// Whether asking the player again can fix this. `false` means the caller asked
    /// for a ship or player that does not exist.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CannotPlaceReason::UnknownShip | CannotPlaceReason::UnknownPlayer
        )
    }
}

/// Error caused when attempting to place a ship in an invalid position. Nothing is left
/// on the grid when this is returned.
#[derive(Error)]
#[error("could not place {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: String,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the name of the ship.
    pub(crate) fn new<S: Into<String>>(reason: CannotPlaceReason, ship: S) -> Self {
        Self {
            reason,
            ship: ship.into(),
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> &CannotPlaceReason {
        &self.reason
    }

    /// Get the name of the ship that was being placed.
    pub fn ship(&self) -> &str {
        &self.ship
    }

    /// Extract the reason from this error.
    pub fn into_reason(self) -> CannotPlaceReason {
        self.reason
    }
}

/// Reason why a particular square could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The target coordinate was blank or invalid.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    /// A shot has already been fired at that square.
    #[error("you have already targeted this location")]
    AlreadyShot,
    /// The match already has a winner.
    #[error("the game is already over")]
    AlreadyOver,
    /// The shooter is not the player whose turn it is.
    #[error("player attempted to shoot out of turn")]
    OutOfTurn,
    /// The shooter is not part of the match.
    #[error("no such player")]
    UnknownPlayer,
}

impl CannotShootReason {
    /// Whether asking the player again can fix this.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CannotShootReason::Coordinate(_) | CannotShootReason::AlreadyShot
        )
    }
}

/// Error returned when trying to shoot a square. The target grid is unchanged when
/// this is returned.
#[derive(Debug, Error)]
#[error("could not shoot at {coord:?}: {reason}")]
pub struct ShotError {
    /// Reason why the square could not be shot.
    reason: CannotShootReason,

    /// The target as it was given.
    coord: String,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified target.
    pub(crate) fn new<S: Into<String>>(reason: CannotShootReason, coord: S) -> Self {
        Self {
            reason,
            coord: coord.into(),
        }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the target as it was given.
    pub fn coord(&self) -> &str {
        &self.coord
    }
}
