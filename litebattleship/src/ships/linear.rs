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
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Coordinate, Dimensions};

/// Direction a ship extends in from its prow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// All orientations.
    pub const ALL: &'static [Orientation] = &[
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Parse a facing typed by a player, keeping `current` if the text is blank.
    pub fn from_input(text: &str, current: Orientation) -> Result<Self, ParseOrientationError> {
        if text.trim().is_empty() {
            Ok(current)
        } else {
            text.parse()
        }
    }

    /// Whether the ship's squares are claimed walking back towards the prow rather than
    /// away from it. For `Up` and `Left` the ship ends at its prow.
    fn claims_backward(self) -> bool {
        match self {
            Orientation::Up | Orientation::Left => true,
            Orientation::Down | Orientation::Right => false,
        }
    }

    /// Get the squares a ship of length `size` needs beyond its prow, in the order they
    /// are claimed. `Down` and `Right` walk away from the prow one square at a time.
    /// `Up` and `Left` start from the far end and walk back to the square next to the
    /// prow. An item is `None` when that square would be off the grid.
    pub fn extend<'a>(
        self,
        dim: &'a Dimensions,
        prow: Coordinate,
        size: usize,
    ) -> impl 'a + Iterator<Item = Option<Coordinate>> {
        let mut steps: Vec<usize> = (1..size).collect();
        if self.claims_backward() {
            steps.reverse();
        }
        steps
            .into_iter()
            .map(move |distance| dim.offset(prow, self, distance))
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Down
    }
}

/// Error returned when text does not name an [`Orientation`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{0:?} does not represent a valid facing, enter D(own), U(p), L(eft) or R(ight)")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Only the first letter counts, so `"d"`, `"Down"` and `"dOwNwArDs"` are all
    /// [`Orientation::Down`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('u') => Ok(Orientation::Up),
            Some('d') => Ok(Orientation::Down),
            Some('l') => Ok(Orientation::Left),
            Some('r') => Ok(Orientation::Right),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}
