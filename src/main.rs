//! Command line tool for exercising the rules of boop.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::path::PathBuf;
use clap::{App, Arg, ArgMatches, SubCommand, crate_version};
use simplelog::{WriteLogger, LevelFilter, Config};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use boop_game::{Game, GameState, Rules, Outcome, Player, random_playout};
use boop_game::boop::variations;

fn main() -> Result<(), Error> {
    let matches =
        App::new("boop")
            .version(crate_version!())
            .about("Counts variations, plays random games, and replays games of boop")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("boop.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .arg(Arg::with_name("rules")
                .long("rules")
                .short("r")
                .global(true)
                .value_name("RULES_FILE")
                .takes_value(true)
                .help("Reads rule settings from a YAML file"))
            .subcommand(SubCommand::with_name("counts")
                .about("Counts the number of variations from a given state to a specified \
                        depth.\nDefaults to the starting state.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the state"))
                .arg(Arg::with_name("state")
                    .value_name("STATE")
                    .multiple(true)
                    .help("State to search, as <board> <turn> <pool1> <pool2> in one argument")))
            .subcommand(SubCommand::with_name("playout")
                .about("Plays games of random legal actions and reports how they end")
                .arg(Arg::with_name("games")
                    .long("games")
                    .short("n")
                    .value_name("COUNT")
                    .takes_value(true)
                    .default_value("1")
                    .help("Number of games to play"))
                .arg(Arg::with_name("seed")
                    .long("seed")
                    .short("s")
                    .value_name("SEED")
                    .takes_value(true)
                    .help("Seeds the random number generator"))
                .arg(Arg::with_name("max-actions")
                    .long("max-actions")
                    .value_name("COUNT")
                    .takes_value(true)
                    .default_value("500")
                    .help("Stops a game after this many actions")))
            .subcommand(SubCommand::with_name("replay")
                .about("Plays the given actions and prints each resulting state")
                .arg(Arg::with_name("from")
                    .long("from")
                    .value_name("STATE")
                    .takes_value(true)
                    .help("State to start from. Defaults to the starting state."))
                .arg(Arg::with_name("actions")
                    .value_name("ACTION")
                    .multiple(true)
                    .required(true)
                    .help("Actions such as sc3, bd4, a1-b1-c1 or +c3")))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink())
    };

    let rules = match matches.value_of("rules") {
        Some(path) => Rules::from_file(path)?,
        None => Rules::default(),
    };
    info!("rules: {:?}", rules);

    match matches.subcommand() {
        ("counts", Some(matches)) => counts(matches, rules)?,
        ("playout", Some(matches)) => playout(matches, rules)?,
        ("replay", Some(matches)) => replay(matches, rules)?,
        _ => return Err(Error("a subcommand is required (try --help)".to_owned())),
    }

    Ok(())
}

fn counts(matches: &ArgMatches<'_>, rules: Rules) -> Result<(), Error> {
    let depth = matches
        .value_of("depth")
        .expect("INFALLIBLE")
        .parse()
        .map_err(|_| {Error("depth must be numeric".to_owned())})?;

    let states = match matches.values_of("state") {
        Some(values) => values
            .map(|s| GameState::from_notation(s, rules).map_err(|err| Error(format!("{}: {}", s, err))))
            .collect::<Result<Vec<_>, _>>()?,
        None => vec![GameState::new(rules)?],
    };

    println!();
    for state in states {
        println!("{}", state);
        let count = variations::print(&state, depth);
        println!("Depth {} total:\t{:12}\n", depth, count);
    }

    Ok(())
}

fn playout(matches: &ArgMatches<'_>, rules: Rules) -> Result<(), Error> {
    let games: usize = matches
        .value_of("games")
        .expect("INFALLIBLE")
        .parse()
        .map_err(|_| {Error("number of games must be numeric".to_owned())})?;
    let max_actions = matches
        .value_of("max-actions")
        .expect("INFALLIBLE")
        .parse()
        .map_err(|_| {Error("max actions must be numeric".to_owned())})?;
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().map_err(|_| {
            Error("seed must be numeric".to_owned())
        })?),
        None => StdRng::from_entropy(),
    };

    let mut wins = [0; Player::COUNT];
    let mut unfinished = 0;
    let mut total_actions = 0;
    for i in 0..games {
        let playout = random_playout(GameState::new(rules)?, &mut rng, max_actions);
        println!("game {}: {} ({} actions)", i + 1, playout.outcome, playout.game.len());
        println!("\t{}", playout.game);

        total_actions += playout.game.len();
        match playout.outcome {
            Outcome::Won(player) => wins[player as usize] += 1,
            Outcome::Stalled | Outcome::Unfinished => unfinished += 1,
        }
    }

    println!();
    println!("player 1 wins:\t{:8}", wins[Player::Player1 as usize]);
    println!("player 2 wins:\t{:8}", wins[Player::Player2 as usize]);
    println!("unfinished:\t{:8}", unfinished);
    if games > 0 {
        println!("mean length:\t{:8.1}", total_actions as f64 / games as f64);
    }

    Ok(())
}

fn replay(matches: &ArgMatches<'_>, rules: Rules) -> Result<(), Error> {
    let state = match matches.value_of("from") {
        Some(s) => GameState::from_notation(s, rules).map_err(|err| Error(format!("{}: {}", s, err)))?,
        None => GameState::new(rules)?,
    };
    let mut game = Game::starting_at(state);

    println!("{:#}\n{}\n", game.state(), game.state());
    for action in matches.values_of("actions").expect("INFALLIBLE") {
        game.play_str(action).map_err(|err| Error(format!("{}: {}", action, err)))?;
        println!("{}\n{:#}\n{}\n", action, game.state(), game.state());
    }

    if let Some(winner) = game.winner() {
        println!("player {} wins", winner);
    }
    if game.repetitions() > 0 {
        println!("state repeated {} time(s)", game.repetitions());
    }

    Ok(())
}

struct Error(String);

impl From<boop_game::LoadRulesError> for Error {
    fn from(err: boop_game::LoadRulesError) -> Self {
        Error(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }
