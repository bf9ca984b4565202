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
//! Implements the setup phase of the board.
use log::{debug, trace};

use crate::{
    board::{Board, CannotPlaceReason, Coordinate, PlaceError, SquareStatus},
    ships::{Orientation, ShipId},
};

impl<'c> Board<'c> {
    /// Place the named ship with its prow at `raw`, extending along `orientation`.
    /// Returns the canonical prow coordinate.
    ///
    /// Placement is all-or-nothing: if any square the ship needs is off the grid or
    /// already holds a ship, every square written so far is cleared before the error
    /// is returned.
    pub fn place(
        &mut self,
        raw: &str,
        orientation: Orientation,
        ship: &str,
    ) -> Result<String, PlaceError> {
        let dim = self.dimensions();
        let id = self
            .fleet
            .id_of(ship)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::UnknownShip, ship))?;
        let prow = dim
            .parse(raw)
            .map_err(|err| PlaceError::new(err.into(), ship))?;
        if self.grid[prow] != SquareStatus::Empty {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyFilled(dim.canonical(prow)),
                ship,
            ));
        }
        let size = match self.fleet.get_mut(id) {
            Some(entry) if !entry.coords().is_empty() => {
                return Err(PlaceError::new(CannotPlaceReason::AlreadyPlaced, ship));
            }
            Some(entry) => {
                entry.set_orientation(orientation);
                entry.size()
            }
            None => return Err(PlaceError::new(CannotPlaceReason::UnknownShip, ship)),
        };

        self.claim(id, prow);
        for step in orientation.extend(dim, prow, size) {
            let reason = match step {
                None => CannotPlaceReason::TooCloseToEdge,
                Some(coord) if self.grid[coord] != SquareStatus::Empty => {
                    CannotPlaceReason::AlreadyFilled(dim.canonical(coord))
                }
                Some(coord) => {
                    trace!("{} extends to {}", ship, dim.label(coord));
                    self.claim(id, coord);
                    continue;
                }
            };
            let cleared = self.clear(id);
            debug!(
                "rolled back {} from {} ({} squares): {}",
                ship,
                dim.label(prow),
                cleared.len(),
                reason
            );
            return Err(PlaceError::new(reason, ship));
        }

        debug!(
            "placed {} at {} facing {:?}",
            ship,
            dim.label(prow),
            orientation
        );
        Ok(dim.canonical(prow))
    }

    /// Remove the named ship from the grid, returning the squares it occupied. Returns
    /// `None` if no ship has that name. Meant for the setup phase: the cleared squares
    /// become `Empty` whatever their status was.
    pub fn unplace(&mut self, ship: &str) -> Option<Vec<Coordinate>> {
        let id = self.fleet.id_of(ship)?;
        let cleared = self.clear(id);
        if !cleared.is_empty() {
            debug!("unplaced {}", ship);
        }
        Some(cleared)
    }

    /// Mark `coord` as holding a ship and record it on the ship.
    fn claim(&mut self, id: ShipId, coord: Coordinate) {
        self.grid[coord] = SquareStatus::Ship;
        if let Some(ship) = self.fleet.get_mut(id) {
            ship.add_coordinate(coord);
        }
    }

    /// Empty every square the ship occupies and forget its coordinates.
    fn clear(&mut self, id: ShipId) -> Vec<Coordinate> {
        let cleared = match self.fleet.get_mut(id) {
            Some(ship) => ship.clear_coordinates(),
            None => Vec::new(),
        };
        for &coord in &cleared {
            self.grid[coord] = SquareStatus::Empty;
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::CoordinateError,
        config::{Config, ShipType},
    };

    fn occupied(board: &Board, ship: &str) -> Vec<String> {
        let dim = board.dimensions();
        board
            .fleet()
            .by_name(ship)
            .map(|ship| ship.coords().iter().map(|&c| dim.canonical(c)).collect())
            .unwrap_or_default()
    }

    fn ship_squares(board: &Board) -> usize {
        board.grid().count(SquareStatus::Ship)
    }

    fn five_by_five(ships: Vec<ShipType>) -> Config {
        Config::sized(5, 5, ships).unwrap()
    }

    #[test]
    fn single_square_ship() {
        let config = Config::default();
        let mut board = Board::new(&config);
        assert_eq!(board.place("c3", Orientation::Up, "Cruiser").unwrap(), "C3");
        assert_eq!(occupied(&board, "Cruiser"), vec!["C3"]);
        assert_eq!(board.grid().get("C3"), Ok(SquareStatus::Ship));
        assert_eq!(ship_squares(&board), 1);
        assert_eq!(
            board.fleet().by_name("Cruiser").unwrap().orientation(),
            Orientation::Up
        );
    }

    #[test]
    fn occupied_prow_is_rejected_for_any_ship() {
        let config = Config::default();
        let mut board = Board::new(&config);
        board.place("C3", Orientation::Down, "Cruiser").unwrap();
        let before = board.clone();

        for ship in &["Cruiser", "Submarine", "Carrier"] {
            let err = board.place("C3", Orientation::Right, ship).unwrap_err();
            assert_eq!(
                *err.reason(),
                CannotPlaceReason::AlreadyFilled("C3".to_string())
            );
            assert_eq!(err.ship(), *ship);
        }
        assert!(board.grid().iter().eq(before.grid().iter()));
        assert_eq!(occupied(&board, "Cruiser"), vec!["C3"]);
        assert!(occupied(&board, "Submarine").is_empty());
        assert!(occupied(&board, "Carrier").is_empty());
    }

    #[test]
    fn extends_right_from_prow() {
        let config = five_by_five(vec![ShipType::new("Cruiser", 3)]);
        let mut board = Board::new(&config);
        assert_eq!(board.place("A1", Orientation::Right, "Cruiser").unwrap(), "A1");
        assert_eq!(occupied(&board, "Cruiser"), vec!["A1", "A2", "A3"]);
        for square in &["A1", "A2", "A3"] {
            assert_eq!(board.grid().get(square), Ok(SquareStatus::Ship));
        }
        assert_eq!(ship_squares(&board), 3);
    }

    #[test]
    fn extends_down_from_prow() {
        let config = five_by_five(vec![ShipType::new("Cruiser", 3)]);
        let mut board = Board::new(&config);
        board.place("B2", Orientation::Down, "Cruiser").unwrap();
        assert_eq!(occupied(&board, "Cruiser"), vec!["B2", "C2", "D2"]);
    }

    #[test]
    fn up_and_left_end_at_the_prow() {
        let config = five_by_five(vec![
            ShipType::new("Cruiser", 3),
            ShipType::new("Frigate", 3),
        ]);
        let mut board = Board::new(&config);
        board.place("E5", Orientation::Up, "Cruiser").unwrap();
        assert_eq!(occupied(&board, "Cruiser"), vec!["E5", "C5", "D5"]);
        board.place("A3", Orientation::Left, "Frigate").unwrap();
        assert_eq!(occupied(&board, "Frigate"), vec!["A3", "A1", "A2"]);
        assert_eq!(
            board.fleet().by_name("Cruiser").unwrap().prow(),
            config.dimensions().parse("E5").ok()
        );
    }

    #[test]
    fn off_the_edge_rolls_back() {
        let config = five_by_five(vec![ShipType::new("Cruiser", 3)]);
        let mut board = Board::new(&config);
        for &(prow, orientation) in &[
            ("A4", Orientation::Right),
            ("A5", Orientation::Right),
            ("D1", Orientation::Down),
            ("B1", Orientation::Left),
            ("A3", Orientation::Up),
        ] {
            let err = board.place(prow, orientation, "Cruiser").unwrap_err();
            assert_eq!(*err.reason(), CannotPlaceReason::TooCloseToEdge);
            assert_eq!(ship_squares(&board), 0);
            assert_eq!(board.grid().count(SquareStatus::Empty), 25);
            assert!(occupied(&board, "Cruiser").is_empty());
        }
        board.place("A3", Orientation::Right, "Cruiser").unwrap();
        assert_eq!(occupied(&board, "Cruiser"), vec!["A3", "A4", "A5"]);
    }

    #[test]
    fn overlap_rolls_back_and_keeps_other_ship() {
        let config = five_by_five(vec![
            ShipType::new("Cruiser", 3),
            ShipType::new("Frigate", 3),
        ]);
        let mut board = Board::new(&config);
        board.place("A3", Orientation::Down, "Cruiser").unwrap();

        let err = board.place("B1", Orientation::Right, "Frigate").unwrap_err();
        assert_eq!(
            *err.reason(),
            CannotPlaceReason::AlreadyFilled("B3".to_string())
        );
        assert!(err.reason().is_recoverable());
        assert!(occupied(&board, "Frigate").is_empty());
        assert_eq!(occupied(&board, "Cruiser"), vec!["A3", "B3", "C3"]);
        assert_eq!(board.grid().get("B1"), Ok(SquareStatus::Empty));
        assert_eq!(board.grid().get("B2"), Ok(SquareStatus::Empty));
        assert_eq!(ship_squares(&board), 3);
    }

    #[test]
    fn coordinate_errors() {
        let config = Config::default();
        let mut board = Board::new(&config);
        assert_eq!(
            *board.place("", Orientation::Down, "Carrier").unwrap_err().reason(),
            CannotPlaceReason::Coordinate(CoordinateError::Blank)
        );
        assert_eq!(
            *board.place("Z9", Orientation::Down, "Carrier").unwrap_err().reason(),
            CannotPlaceReason::Coordinate(CoordinateError::Invalid { example: "D3" })
        );
        assert_eq!(ship_squares(&board), 0);
    }

    #[test]
    fn unknown_and_already_placed() {
        let config = Config::default();
        let mut board = Board::new(&config);
        let err = board.place("A1", Orientation::Down, "Dinghy").unwrap_err();
        assert_eq!(*err.reason(), CannotPlaceReason::UnknownShip);
        assert!(!err.reason().is_recoverable());

        board.place("A1", Orientation::Down, "Carrier").unwrap();
        let err = board.place("C3", Orientation::Down, "Carrier").unwrap_err();
        assert_eq!(*err.reason(), CannotPlaceReason::AlreadyPlaced);
        assert_eq!(occupied(&board, "Carrier"), vec!["A1", "B1"]);
        assert_eq!(board.grid().get("C3"), Ok(SquareStatus::Empty));
    }

    #[test]
    fn unplace_then_place_elsewhere() {
        let config = Config::default();
        let mut board = Board::new(&config);
        board.place("A1", Orientation::Right, "Battleship").unwrap();
        let cleared = board.unplace("Battleship").unwrap();
        assert_eq!(cleared.len(), 2);
        assert_eq!(ship_squares(&board), 0);
        assert!(!board.fleet().by_name("Battleship").unwrap().placed());

        assert_eq!(board.unplace("Battleship"), Some(Vec::new()));
        assert_eq!(board.unplace("Dinghy"), None);

        board.place("E4", Orientation::Right, "Battleship").unwrap();
        assert_eq!(occupied(&board, "Battleship"), vec!["E4", "E5"]);
    }
}
