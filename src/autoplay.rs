use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::session::Session;
use crate::tic_tac_toe::Outcome;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub player_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> usize {
        self.player_wins + self.computer_wins + self.draws
    }
}

/// Plays `games` full games of the engine against a human that picks
/// uniformly among the empty cells.
pub(crate) fn play<R: Rng>(games: usize, rng: &mut R) -> anyhow::Result<Tally> {
    let mut session = Session::new();
    let mut tally = Tally::default();

    for game in 0..games {
        session.reset_game();
        let outcome = play_one(&mut session, rng)?;
        debug!("game {} ended {:?}\n{}", game, outcome, session.board());
        tally.record(outcome);
    }

    info!(
        "{} games: {} player wins, {} computer wins, {} draws",
        tally.games(),
        tally.player_wins,
        tally.computer_wins,
        tally.draws
    );
    Ok(tally)
}

fn play_one<R: Rng>(session: &mut Session, rng: &mut R) -> anyhow::Result<Outcome> {
    loop {
        let empty = session.board().empty_cells();
        let &(row, col) = match empty.choose(rng) {
            Some(cell) => cell,
            None => return Ok(session.outcome()),
        };

        let outcome = session.apply_player_move(row, col);
        if outcome.is_terminal() {
            return Ok(outcome);
        }

        match session.compute_computer_move()? {
            Some((_, outcome)) if outcome.is_terminal() => return Ok(outcome),
            Some(_) => {}
            None => return Ok(session.outcome()),
        }
    }
}
