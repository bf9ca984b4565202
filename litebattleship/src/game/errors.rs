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
use std::fmt::{self, Debug};

use thiserror::Error;

/// Reason why a player could not join the match.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAddPlayerReason {
    /// The name was empty or only whitespace.
    #[error("names must not be blank")]
    BlankName,
    /// Every seat in the match is taken.
    #[error("the match already has all of its players")]
    TooManyPlayers,
}

impl CannotAddPlayerReason {
    /// Whether asking for another name can fix this.
    pub fn is_recoverable(&self) -> bool {
        *self == CannotAddPlayerReason::BlankName
    }
}

/// Error returned when trying to add a player to a match.
#[derive(Error)]
#[error("could not add player {name:?}: {reason}")]
pub struct AddPlayerError {
    #[source]
    reason: CannotAddPlayerReason,
    /// The name the player was added with.
    name: String,
}

impl AddPlayerError {
    /// Create an [`AddPlayerError`] for the player with the given name.
    pub(super) fn new<S: Into<String>>(reason: CannotAddPlayerReason, name: S) -> Self {
        Self {
            reason,
            name: name.into(),
        }
    }

    /// Get the reason the player was not added.
    pub fn reason(&self) -> CannotAddPlayerReason {
        self.reason
    }

    /// The name that was rejected.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extract the rejected name from this error.
    pub fn into_name(self) -> String {
        self.name
    }
}

impl Debug for AddPlayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
