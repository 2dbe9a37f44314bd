mod autoplay;
mod cli;
mod error;
mod game;
mod input;
mod minimax;
mod session;
mod tic_tac_toe;

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::input::{parse_command, Command};
use crate::session::{Phase, Session};
use crate::tic_tac_toe::Outcome;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.autoplay {
        Some(games) => run_autoplay(games, cli.seed),
        None => run_interactive(),
    }
}

fn run_autoplay(games: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let tally = autoplay::play(games, &mut rng)?;
    println!(
        "{} games: {} player wins, {} computer wins, {} draws",
        tally.games(),
        tally.player_wins,
        tally.computer_wins,
        tally.draws
    );
    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();
    info!("starting interactive game");

    loop {
        println!("{}", session.board());

        let game_over = match session.phase() {
            Phase::GameOver(outcome) => {
                println!("{}", end_message(outcome));
                println!("Press R to restart or Q to quit");
                true
            }
            _ => {
                print!("Your move (row col): ");
                false
            }
        };
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{:#}", err);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Restart => session.reset_game(),
            Command::Move(_, _) if game_over => {
                println!("The game is over.");
            }
            Command::Move(row, col) => {
                if let Err(err) = session.is_open(row, col) {
                    println!("{}", err);
                    continue;
                }
                if session.apply_player_move(row, col).is_terminal() {
                    continue;
                }
                if let Some(((row, col), _)) = session.compute_computer_move()? {
                    println!("Computer plays {} {}", row, col);
                }
            }
        }
    }

    Ok(())
}

fn end_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "You win!",
        Outcome::ComputerWin => "You lose!",
        Outcome::Draw => "It's a tie!",
        Outcome::InProgress => "",
    }
}
