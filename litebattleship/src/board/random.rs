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
//! Random ship placement.
use log::debug;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    board::{Board, CannotPlaceReason, PlaceError},
    ships::Orientation,
};

/// Random tries per grid square before falling back to scanning every position.
const ATTEMPTS_PER_SQUARE: usize = 4;

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0, Orientation::ALL.len())]
    }
}

impl<'c> Board<'c> {
    /// Place the named ship at a random prow and orientation. Fails only if the ship is
    /// unknown or already placed, or if there is no room left for it anywhere.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: &str,
    ) -> Result<String, PlaceError> {
        let dim = self.dimensions();
        for _ in 0..dim.total_size() * ATTEMPTS_PER_SQUARE {
            let row = rng.gen_range(0, dim.height());
            let col = rng.gen_range(0, dim.width());
            let prow = match dim.coordinate(row, col) {
                Some(coord) => dim.canonical(coord),
                None => continue,
            };
            match self.place(&prow, rng.gen(), ship) {
                Err(err) if retryable(err.reason()) => {}
                result => return result,
            }
        }

        debug!("no random spot for {}, scanning the grid", ship);
        let mut last = PlaceError::new(CannotPlaceReason::TooCloseToEdge, ship);
        for coord in dim.coordinates() {
            for &orientation in Orientation::ALL {
                match self.place(&dim.canonical(coord), orientation, ship) {
                    Err(err) if retryable(err.reason()) => last = err,
                    result => return result,
                }
            }
        }
        Err(last)
    }

    /// Randomly place every ship that is not placed yet.
    pub fn place_pending_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlaceError> {
        let pending: Vec<String> = self.fleet.pending().map(str::to_owned).collect();
        for ship in pending {
            self.place_randomly(rng, &ship)?;
        }
        Ok(())
    }
}

/// Whether another position might succeed.
fn retryable(reason: &CannotPlaceReason) -> bool {
    match reason {
        CannotPlaceReason::AlreadyFilled(_) | CannotPlaceReason::TooCloseToEdge => true,
        _ => false,
    }
}
