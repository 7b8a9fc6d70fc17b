//
// This file is part of noughts.
//
// noughts is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// noughts is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with noughts. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use noughts::{Command, Game, Mark, MinimaxSearch, Move, Phase, Settings};

/// Play tic-tac-toe against a perfect opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts", version, about, long_about = None)]
struct Cli {
    /// Mark played by the computer
    #[arg(long, value_enum, default_value_t = Side::O)]
    computer: Side,

    /// Who opens the first round
    #[arg(long, value_enum, default_value_t = First::Computer)]
    first: First,

    /// Log the score of every move the computer considers
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    X,
    O,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum First {
    Computer,
    Human,
}

impl Cli {
    fn settings(&self) -> Settings {
        let computer = match self.computer {
            Side::X => Mark::X,
            Side::O => Mark::O,
        };

        Settings {
            computer,
            first: match self.first {
                First::Computer => computer,
                First::Human => computer.opponent(),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter))
        )
        .with_writer(io::stderr)
        .init();

    let mut game = Game::new(cli.settings());
    let mut search = MinimaxSearch::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("You are {}.  Enter a cell number to move, or q to quit.", game.human());

    loop {
        match game.phase() {
            Phase::Quit => break,
            Phase::RoundOver(outcome) => {
                println!("\n{}\n\n{}", game.board(), outcome);
                println!("Rounds: {}", game.tally());

                let command = match prompt(&mut input, "Continue? (y/n): ")? {
                    Some(ref answer) if answer.starts_with('n') || answer.starts_with('q') => Command::Quit,
                    Some(_) => Command::NextRound,
                    None => Command::Quit,
                };
                game.apply(command)?;
            },
            Phase::InProgress => {
                println!("\n{}\n", game.board());

                if game.is_computer_turn() {
                    let (turn, analysis) = game.play_computer(&mut search)?;
                    if cli.verbose {
                        println!("{}\n", analysis);
                    }
                    println!("Computer plays {}", turn.ply.index() + 1);
                    continue;
                }

                let answer = match prompt(&mut input, "Your move (1-9): ")? {
                    Some(answer) => answer,
                    None => {
                        game.apply(Command::Quit)?;
                        continue;
                    },
                };

                if answer == "q" || answer == "quit" {
                    game.apply(Command::Quit)?;
                    continue;
                }

                if let Err(error) = answer.parse::<Move>().and_then(|ply| game.play_human(ply)) {
                    println!("Invalid entry, try again: {}", error);
                }
            },
        }
    }

    println!("Final tally: {}", game.tally());
    Ok(())
}

/// Prints `text` and reads one trimmed, lowercased line.  `None` at end of input.
fn prompt<R>(input: &mut R, text: &str) -> io::Result<Option<String>> where
    R: BufRead {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
