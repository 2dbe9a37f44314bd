use log::{debug, info};

use crate::error::Error;
use crate::minimax::Minimax;
use crate::tic_tac_toe::{Board, Cell, Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    PlayerToMove,
    ComputerToMove,
    GameOver(Outcome),
}

/// One game between the human and the computer. Owns the only board; a
/// restart clears it in place.
pub(crate) struct Session {
    board: Board,
    phase: Phase,
    engine: Minimax<Board>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::PlayerToMove,
            engine: Minimax::new(Mark::Computer, Mark::Player),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Puts the human's mark on `(row, col)`.
    ///
    /// Occupied or out-of-range cells, and moves made out of turn, are
    /// ignored: nothing changes and the current outcome is returned.
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Outcome {
        if self.phase != Phase::PlayerToMove {
            debug!("ignoring player move ({}, {}) in {:?}", row, col, self.phase);
            return self.outcome();
        }

        if let Err(err) = self.board.place(row, col, Mark::Player) {
            debug!("ignoring player move: {}", err);
            return self.outcome();
        }

        self.advance(Phase::ComputerToMove)
    }

    /// Lets the computer reply. Returns the chosen cell and the resulting
    /// outcome, or `None` when it is not the computer's turn.
    pub fn compute_computer_move(&mut self) -> anyhow::Result<Option<((usize, usize), Outcome)>> {
        if self.phase != Phase::ComputerToMove {
            debug!("no computer move in {:?}", self.phase);
            return Ok(None);
        }

        let (row, col) = match self.engine.select_move(&mut self.board)? {
            Some(action) => action,
            None => return Ok(None),
        };
        debug!(
            "computer plays ({}, {}) after searching {} positions",
            row,
            col,
            self.engine.nodes()
        );
        self.board.place(row, col, Mark::Computer)?;

        let outcome = self.advance(Phase::PlayerToMove);
        Ok(Some(((row, col), outcome)))
    }

    pub fn reset_game(&mut self) {
        for row in 0..3 {
            for col in 0..3 {
                self.board.clear(row, col);
            }
        }
        self.phase = Phase::PlayerToMove;
        debug!("game reset");
    }

    /// Whether `(row, col)` would be accepted as the human's next move.
    pub fn is_open(&self, row: usize, col: usize) -> Result<(), Error> {
        match self.board.cell(row, col) {
            None => Err(Error::OutOfBounds { row, col }),
            Some(Cell::Filled(_)) => Err(Error::CellOccupied { row, col }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    fn advance(&mut self, next: Phase) -> Outcome {
        let outcome = self.outcome();
        self.phase = if outcome.is_terminal() {
            info!("game over: {:?}", outcome);
            Phase::GameOver(outcome)
        } else {
            next
        };
        debug!("now in {:?}", self.phase);
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
