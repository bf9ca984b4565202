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
//! Grid and fleet engine for the two-player game of Battleship.
//!
//! Every size, label and ship in the game comes from a [`Config`] which is built once
//! and borrowed by the [`game::MatchSetup`] and everything it creates. Players place
//! ships onto their [`board::Board`] during setup, then take turns shooting at their
//! enemy's board in a [`game::Match`] until one fleet is sunk.
//!
//! ```
//! use litebattleship::{
//!     game::MatchSetup,
//!     ships::Orientation,
//!     Config,
//! };
//!
//! let config = Config::default();
//! let mut setup = MatchSetup::new(&config);
//! let alice = setup.add_player("Alice").unwrap();
//! let bob = setup.add_player("Bob").unwrap();
//! setup.place(alice, "A1", Orientation::Right, "Carrier").unwrap();
//! assert!(!setup.ready());
//! # let _ = bob;
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod ships;

pub use crate::config::{Config, ConfigError, Markers, ShipType};
