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
//! The match as a whole: seating players, the setup phase, and taking turns.
//!
//! [`MatchSetup`] collects players and their ship placements. Once every seat is
//! filled and every ship placed, [`MatchSetup::start`] turns it into a [`Match`],
//! where players shoot at their enemy's board in a fixed round-robin order until one
//! of them sinks the enemy's whole fleet.
use log::{debug, info};

use crate::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, Coordinate, PlaceError, Score, ShotError,
        ShotOutcome,
    },
    config::Config,
    ships::Orientation,
};

pub use self::errors::{AddPlayerError, CannotAddPlayerReason};

mod errors;

/// A seated player with their own board.
#[derive(Debug, Clone)]
pub struct Player<'c> {
    /// Display name, never blank.
    name: String,

    /// Position in the turn order.
    index: usize,

    /// Index of the player this one shoots at.
    enemy: usize,

    /// This player's grid and fleet.
    board: Board<'c>,
}

impl<'c> Player<'c> {
    fn new(config: &'c Config, name: String, index: usize) -> Self {
        Self {
            name,
            index,
            enemy: (index + 1) % config.players(),
            board: Board::new(config),
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's position in the turn order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The index of the player this one targets.
    pub fn enemy(&self) -> usize {
        self.enemy
    }

    /// The player's own board.
    pub fn board(&self) -> &Board<'c> {
        &self.board
    }
}

/// Handles setup for the match. Acts as a builder for [`Match`].
#[derive(Debug, Clone)]
pub struct MatchSetup<'c> {
    config: &'c Config,

    /// Players in turn order.
    players: Vec<Player<'c>>,
}

impl<'c> MatchSetup<'c> {
    /// Start setting up a match with no players.
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            players: Vec::with_capacity(config.players()),
        }
    }

    /// The configuration the match is played with.
    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Seat a player, returning their index in the turn order. Surrounding whitespace
    /// is trimmed from the name.
    pub fn add_player(&mut self, name: &str) -> Result<usize, AddPlayerError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AddPlayerError::new(CannotAddPlayerReason::BlankName, name));
        }
        if self.players.len() >= self.config.players() {
            return Err(AddPlayerError::new(
                CannotAddPlayerReason::TooManyPlayers,
                name,
            ));
        }
        let index = self.players.len();
        self.players
            .push(Player::new(self.config, trimmed.to_owned(), index));
        debug!("seated {} as player {}", trimmed, index);
        Ok(index)
    }

    /// The seated players, in turn order.
    pub fn players(&self) -> &[Player<'c>] {
        &self.players
    }

    /// Get the player at the given index.
    pub fn player(&self, player: usize) -> Option<&Player<'c>> {
        self.players.get(player)
    }

    /// Place one of the player's ships. See [`Board::place`].
    pub fn place(
        &mut self,
        player: usize,
        raw: &str,
        orientation: Orientation,
        ship: &str,
    ) -> Result<String, PlaceError> {
        self.board_mut(player, ship)?.place(raw, orientation, ship)
    }

    /// Remove one of the player's ships from their grid. Returns `None` if the player
    /// or ship does not exist.
    pub fn unplace(&mut self, player: usize, ship: &str) -> Option<Vec<Coordinate>> {
        self.players.get_mut(player)?.board.unplace(ship)
    }

    /// Randomly place every ship the player has not placed yet. See
    /// [`Board::place_randomly`].
    #[cfg(feature = "rng_gen")]
    pub fn randomize_pending<R: rand::Rng + ?Sized>(
        &mut self,
        player: usize,
        rng: &mut R,
    ) -> Result<(), PlaceError> {
        self.board_mut(player, "")?.place_pending_randomly(rng)
    }

    /// Whether the player exists and has placed all of their ships.
    pub fn is_player_ready(&self, player: usize) -> bool {
        self.players
            .get(player)
            .map_or(false, |p| p.board.fleet().all_placed())
    }

    /// Whether every seat is filled and every ship is placed.
    pub fn ready(&self) -> bool {
        self.players.len() == self.config.players()
            && self
                .players
                .iter()
                .all(|player| player.board.fleet().all_placed())
    }

    /// Tries to start the match. If all players are ready, returns a [`Match`] with the
    /// current setup, otherwise returns `self` unchanged.
    pub fn start(self) -> Result<Match<'c>, Self> {
        if !self.ready() {
            return Err(self);
        }
        debug!("starting match with {} players", self.players.len());
        Ok(Match {
            config: self.config,
            players: self.players,
            current: 0,
            winner: None,
        })
    }

    fn board_mut(&mut self, player: usize, ship: &str) -> Result<&mut Board<'c>, PlaceError> {
        self.players
            .get_mut(player)
            .map(|p| &mut p.board)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::UnknownPlayer, ship))
    }
}

/// A match in progress.
#[derive(Debug, Clone)]
pub struct Match<'c> {
    config: &'c Config,

    /// Players in turn order.
    players: Vec<Player<'c>>,

    /// Index of the player whose turn it is.
    current: usize,

    /// Set on the shot that sinks an enemy's last ship.
    winner: Option<usize>,
}

impl<'c> Match<'c> {
    /// The configuration the match is played with.
    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// The players, in turn order.
    pub fn players(&self) -> &[Player<'c>] {
        &self.players
    }

    /// Get the player at the given index.
    pub fn player(&self, player: usize) -> Option<&Player<'c>> {
        self.players.get(player)
    }

    /// Index of the player whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Index of the player that `player` shoots at.
    pub fn enemy_of(&self, player: usize) -> Option<usize> {
        self.player(player).map(Player::enemy)
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Fire the shooter's shot at their enemy's board. Only the current player may
    /// shoot, and nobody may once there is a winner. The turn passes to the next player
    /// after a successful shot that does not win the match.
    pub fn shoot(&mut self, shooter: usize, raw: &str) -> Result<ShotOutcome, ShotError> {
        let enemy = self
            .enemy_of(shooter)
            .ok_or_else(|| ShotError::new(CannotShootReason::UnknownPlayer, raw))?;
        if self.winner.is_some() {
            return Err(ShotError::new(CannotShootReason::AlreadyOver, raw));
        }
        if shooter != self.current {
            return Err(ShotError::new(CannotShootReason::OutOfTurn, raw));
        }

        let outcome = self.players[enemy].board.shoot(raw)?;
        debug!(
            "{} fired at {}: {:?}",
            self.players[shooter].name, self.players[enemy].name, outcome
        );
        if self.has_won(shooter) {
            info!("{} has won", self.players[shooter].name);
            self.winner = Some(shooter);
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
        Ok(outcome)
    }

    /// Whether every ship of the player's enemy is sunk. Always `false` for an unknown
    /// player.
    pub fn has_won(&self, player: usize) -> bool {
        self.enemy_of(player)
            .and_then(|enemy| self.players.get(enemy))
            .map_or(false, |enemy| enemy.board.defeated())
    }

    /// Hits and shots the player has landed, counted on their enemy's grid.
    pub fn score(&self, player: usize) -> Option<Score> {
        let enemy = self.enemy_of(player)?;
        self.players.get(enemy).map(|enemy| enemy.board.tally())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipType;

    /// A 3x3 game where each player has a Frigate (2) and a Cutter (1).
    fn small_config() -> Config {
        Config::sized(
            3,
            3,
            vec![ShipType::new("Frigate", 2), ShipType::new("Cutter", 1)],
        )
        .unwrap()
    }

    fn placed_setup(config: &Config) -> MatchSetup {
        let mut setup = MatchSetup::new(config);
        for name in &["Alice", "Bob"] {
            let player = setup.add_player(name).unwrap();
            setup
                .place(player, "A1", Orientation::Right, "Frigate")
                .unwrap();
            setup.place(player, "C3", Orientation::Down, "Cutter").unwrap();
        }
        setup
    }

    #[test]
    fn seating_players() {
        let config = small_config();
        let mut setup = MatchSetup::new(&config);
        let err = setup.add_player("   ").unwrap_err();
        assert_eq!(err.reason(), CannotAddPlayerReason::BlankName);
        assert!(err.reason().is_recoverable());

        assert_eq!(setup.add_player(" Alice ").unwrap(), 0);
        assert_eq!(setup.add_player("Bob").unwrap(), 1);
        let err = setup.add_player("Carol").unwrap_err();
        assert_eq!(err.reason(), CannotAddPlayerReason::TooManyPlayers);
        assert!(!err.reason().is_recoverable());
        assert_eq!(err.name(), "Carol");

        let alice = setup.player(0).unwrap();
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.enemy(), 1);
        assert_eq!(setup.player(1).unwrap().enemy(), 0);
        assert_eq!(setup.players().len(), 2);
    }

    #[test]
    fn start_requires_full_roster_and_fleets() {
        let config = small_config();
        let mut setup = MatchSetup::new(&config);
        let alice = setup.add_player("Alice").unwrap();
        setup.place(alice, "A1", Orientation::Right, "Frigate").unwrap();
        setup.place(alice, "C3", Orientation::Down, "Cutter").unwrap();
        assert!(setup.is_player_ready(alice));
        let mut setup = setup.start().unwrap_err();

        let bob = setup.add_player("Bob").unwrap();
        setup.place(bob, "B1", Orientation::Down, "Cutter").unwrap();
        assert!(!setup.ready());
        let mut setup = setup.start().unwrap_err();
        setup.place(bob, "C1", Orientation::Right, "Frigate").unwrap();
        assert!(setup.ready());
        let game = setup.start().unwrap();
        assert_eq!(game.current(), alice);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn placing_for_unknown_player() {
        let config = small_config();
        let mut setup = MatchSetup::new(&config);
        let err = setup.place(4, "A1", Orientation::Down, "Cutter").unwrap_err();
        assert_eq!(*err.reason(), CannotPlaceReason::UnknownPlayer);
        assert!(!err.reason().is_recoverable());
        assert_eq!(setup.unplace(4, "Cutter"), None);
    }

    #[test]
    fn turns_alternate_and_failed_shots_keep_the_turn() {
        let config = small_config();
        let mut game = placed_setup(&config).start().unwrap();

        assert_eq!(
            game.shoot(1, "B2").unwrap_err().reason(),
            CannotShootReason::OutOfTurn
        );
        assert_eq!(game.shoot(0, "B2").unwrap(), ShotOutcome::Miss);
        assert_eq!(game.current(), 1);
        assert!(game.shoot(1, "A1").unwrap().is_hit());
        assert_eq!(game.current(), 0);

        assert_eq!(
            game.shoot(0, "B2").unwrap_err().reason(),
            CannotShootReason::AlreadyShot
        );
        assert_eq!(
            game.shoot(0, "").unwrap_err().reason(),
            CannotShootReason::Coordinate(crate::board::CoordinateError::Blank)
        );
        assert_eq!(game.current(), 0);
        assert_eq!(
            game.shoot(9, "A1").unwrap_err().reason(),
            CannotShootReason::UnknownPlayer
        );
        assert_eq!(game.score(0), Some(Score { hits: 0, shots: 1 }));
        assert_eq!(game.score(1), Some(Score { hits: 1, shots: 1 }));
        assert_eq!(game.score(2), None);
    }

    #[test]
    fn winning_ends_the_match() {
        let config = small_config();
        let mut game = placed_setup(&config).start().unwrap();
        let alice_shots = ["A1", "A2", "C3"];
        let bob_shots = ["B1", "B2"];
        for turn in 0..2 {
            game.shoot(0, alice_shots[turn]).unwrap();
            assert!(!game.has_won(0));
            game.shoot(1, bob_shots[turn]).unwrap();
        }
        let bob = game.player(1).unwrap().board();
        assert!(bob.fleet().by_name("Frigate").unwrap().sunk());
        assert!(!bob.defeated());

        match game.shoot(0, alice_shots[2]).unwrap() {
            ShotOutcome::Defeated(_) => {}
            other => panic!("expected Defeated, got {:?}", other),
        }
        assert!(game.has_won(0));
        assert!(game.has_won(0));
        assert!(!game.has_won(1));
        assert_eq!(game.winner(), Some(0));
        assert!(game.is_over());
        assert_eq!(game.current(), 0);

        for &(shooter, target) in &[(1, "C1"), (0, "B3")] {
            assert_eq!(
                game.shoot(shooter, target).unwrap_err().reason(),
                CannotShootReason::AlreadyOver
            );
        }
        assert!(game.has_won(0));
        assert_eq!(game.score(0), Some(Score { hits: 3, shots: 3 }));
        assert_eq!(game.score(1), Some(Score { hits: 0, shots: 2 }));
    }
}
