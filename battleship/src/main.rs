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
use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use litebattleship::{
    board::{BitFlags, Board, ShotOutcome, SquareStatus},
    game::{Match, MatchSetup},
    ships::{Orientation, Ship},
    Config, ConfigError, Markers,
};

/// Squares shown while a player places their own ships.
static SETUP_VIEW: Lazy<BitFlags<SquareStatus>> = Lazy::new(|| SquareStatus::Ship.into());

/// Squares shown on the enemy grid during play.
static PLAY_VIEW: Lazy<BitFlags<SquareStatus>> =
    Lazy::new(|| SquareStatus::Hit | SquareStatus::Miss);

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Battleship")
        .version("1.0")
        .about("Two player command line battleship game.")
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("FLEET")
                .help("which set of ships to play with")
                .takes_value(true)
                .possible_values(&["lite", "classic"])
                .default_value("lite")
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows in each grid (defaults to the fleet's grid)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .value_name("COLUMNS")
                .help("number of columns in each grid (defaults to the fleet's grid)")
                .takes_value(true),
        )
        .get_matches();

    let config = build_config(&matches).map_err(invalid_input)?;
    debug!(
        "playing on a {}x{} grid",
        config.dimensions().height(),
        config.dimensions().width()
    );

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    println!();
    println!("Welcome to BATTLESHIPS - LIGHT!");

    let mut setup = MatchSetup::new(&config);
    for seat in 1..=config.players() {
        let player = input.read_input(
            &format!("Hello player {}, please enter your name:", seat),
            |name| match setup.add_player(name) {
                Ok(player) => Some(Ok(player)),
                Err(err) if err.reason().is_recoverable() => {
                    println!("{}", err.reason());
                    None
                }
                Err(err) => Some(Err(err)),
            },
        )?;
        let player = player.map_err(invalid_input)?;
        choose_placements(&mut rng, &mut setup, player, &mut input)?;
    }

    let mut game = setup
        .start()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "not every ship was placed"))?;
    println!();
    println!("LET'S PLAY THE GAME!");
    input.wait_to_proceed()?;

    play(&mut game, &mut input)?;
    show_results(&game);
    Ok(())
}

/// Build the game configuration from the command line arguments.
fn build_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let fleet = match matches.value_of("fleet") {
        Some(fleet) if fleet.eq_ignore_ascii_case("classic") => Config::classic(),
        _ => Config::default(),
    };
    if matches.value_of("rows").is_none() && matches.value_of("columns").is_none() {
        return Ok(fleet);
    }
    let rows = if matches.is_present("rows") {
        value_t!(matches, "rows", usize).unwrap_or_else(|err| err.exit())
    } else {
        fleet.dimensions().height()
    };
    let columns = if matches.is_present("columns") {
        value_t!(matches, "columns", usize).unwrap_or_else(|err| err.exit())
    } else {
        fleet.dimensions().width()
    };
    let config = Config::sized(rows, columns, fleet.ships().to_vec())?;
    Ok(config.with_markers(fleet.markers().clone()))
}

/// Ask the player where each of their ships goes.
fn choose_placements(
    rng: &mut impl Rng,
    setup: &mut MatchSetup,
    player: usize,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    /// A coordinate with an optional facing after it.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<coord>[[:alnum:]]+)
        (?:\s+(?P<dir>[[:alpha:]]+))?$",
        )
        .unwrap()
    });

    let markers = setup.config().markers();
    let name = match setup.player(player) {
        Some(player) => player.name().to_owned(),
        None => return Ok(()),
    };
    println!();
    println!("Thank you {}. Please place your ships.", name);
    println!(
        "Enter a coordinate such as {} followed by a facing (up, down, left or right),",
        setup.config().dimensions().example()
    );
    println!("or type random to place the rest of your ships randomly.");

    loop {
        let next = match setup.player(player) {
            Some(p) => p.board().fleet().pending().next().map(str::to_owned),
            None => None,
        };
        let ship = match next {
            Some(ship) => ship,
            None => break,
        };
        let size = setup
            .player(player)
            .and_then(|p| p.board().fleet().by_name(&ship).map(Ship::size))
            .unwrap_or_default();

        println!();
        show_board(setup.player(player).map(|p| p.board()), markers, *SETUP_VIEW);
        let placed = input.read_input(
            &format!(
                "Please enter the co-ordinates for the {} ship (size {}):",
                ship, size
            ),
            |text| {
                if text.eq_ignore_ascii_case("random") {
                    return match setup.randomize_pending(player, &mut *rng) {
                        Ok(()) => Some(Ok(())),
                        Err(err) if err.reason().is_recoverable() => {
                            println!("{}", err);
                            None
                        }
                        Err(err) => Some(Err(err)),
                    };
                }
                let captures = match PLACE.captures(text) {
                    Some(captures) => captures,
                    None => {
                        println!(
                            "Enter a coordinate such as {} and an optional facing.",
                            setup.config().dimensions().example()
                        );
                        return None;
                    }
                };
                let coord = captures.name("coord").map_or("", |m| m.as_str());
                let dir = captures.name("dir").map_or("", |m| m.as_str());
                let facing = match Orientation::from_input(dir, Orientation::default()) {
                    Ok(facing) => facing,
                    Err(err) => {
                        println!("{}", err);
                        return None;
                    }
                };
                match setup.place(player, coord, facing, &ship) {
                    Ok(prow) => {
                        println!("{} placed at {} facing {:?}.", ship, prow, facing);
                        Some(Ok(()))
                    }
                    Err(err) if err.reason().is_recoverable() => {
                        println!("{}", err.reason());
                        None
                    }
                    Err(err) => Some(Err(err)),
                }
            },
        )?;
        placed.map_err(invalid_input)?;
    }

    println!();
    println!("Your fleet:");
    show_board(setup.player(player).map(|p| p.board()), markers, *SETUP_VIEW);
    input.wait_to_proceed()
}

/// Take turns until someone wins.
fn play(game: &mut Match, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    let markers = game.config().markers();
    while game.winner().is_none() {
        let shooter = game.current();
        let (name, enemy) = match (game.player(shooter), game.enemy_of(shooter)) {
            (Some(player), Some(enemy)) => (player.name().to_owned(), enemy),
            _ => break,
        };

        println!();
        println!("        Player: {}", name);
        println!();
        println!("{} please take your shot:", name);
        println!("Hit = {},    Miss = {}", markers.hit, markers.miss);
        println!();
        show_board(game.player(enemy).map(|p| p.board()), markers, *PLAY_VIEW);

        let outcome = input.read_input(&format!("{} where do you want to shoot?", name), |raw| {
            match game.shoot(shooter, raw) {
                Ok(outcome) => Some(Ok(outcome)),
                Err(err) if err.reason().is_recoverable() => {
                    println!("{}", err.reason());
                    None
                }
                Err(err) => Some(Err(err)),
            }
        })?;
        let outcome = outcome.map_err(invalid_input)?;

        println!();
        let sunk = |id| {
            game.player(enemy)
                .and_then(|p| p.board().ship(id))
                .map_or("ship", Ship::name)
        };
        match outcome {
            ShotOutcome::Miss => println!("        Missed"),
            ShotOutcome::Hit(_) => println!("        A Hit!"),
            ShotOutcome::Sunk(id) | ShotOutcome::Defeated(id) => {
                println!("        A Hit! You sank the {}!", sunk(id))
            }
        }
        if game.winner().is_none() {
            input.wait_to_proceed()?;
        }
    }
    Ok(())
}

/// Announce the winner and everyone's hit rate.
fn show_results(game: &Match) {
    println!();
    if let Some(winner) = game.winner().and_then(|winner| game.player(winner)) {
        println!("WE HAVE A WINNER!");
        println!(
            "WINNER: {} has destroyed all their target ships.",
            winner.name()
        );
    }
    println!();
    println!("The hit rates of each player are:");
    for player in game.players() {
        if let Some(score) = game.score(player.index()) {
            println!(
                "{} hit {} times out of {} taken.",
                player.name(),
                score.hits,
                score.shots
            );
        }
    }
}

/// Show the board by printing the grid with its row and column labels. Squares whose
/// status is not in `visible` are drawn blank.
fn show_board(board: Option<&Board>, markers: &Markers, visible: BitFlags<SquareStatus>) {
    let board = match board {
        Some(board) => board,
        None => return,
    };
    let dim = board.dimensions();
    print!("    ");
    for col in dim.col_labels() {
        print!("{:^4}", col);
    }
    println!();
    for (label, row) in dim.row_labels().iter().zip(dim.iter_coordinates()) {
        print!("{:>3} ", label);
        for coord in row {
            let glyph = board
                .grid()
                .status(coord)
                .map_or(markers.blank.as_str(), |status| {
                    markers.glyph(status, visible)
                });
            print!("{:^4}", glyph);
        }
        println!();
    }
}

/// Wrap a library error that no amount of re-prompting can fix.
fn invalid_input<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Pause until the player presses return.
    fn wait_to_proceed(&mut self) -> io::Result<()> {
        self.read_input("Press RETURN to proceed.", |_| Some(()))
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
