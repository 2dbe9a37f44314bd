use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Mark {
    /// The human, who always moves first.
    Player,
    Computer,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Cell {
    Empty,
    Filled(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The 3x3 grid. Holds nothing but the cells; the outcome is always derived
/// from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Puts `mark` on an empty cell.
    ///
    /// Fails without touching the grid if the cell is occupied or out of range.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), Error> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::OutOfBounds { row, col })?;
        match *cell {
            Cell::Empty => {
                *cell = Cell::Filled(mark);
                Ok(())
            }
            Cell::Filled(_) => Err(Error::CellOccupied { row, col }),
        }
    }

    /// Resets a cell to empty. Out-of-range coordinates are ignored.
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Cell::Empty;
        }
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        let filled = Cell::Filled(mark);

        // Rows and columns
        for i in 0..3 {
            if (0..3).all(|j| self.cells[i][j] == filled) {
                return true;
            }
            if (0..3).all(|j| self.cells[j][i] == filled) {
                return true;
            }
        }

        // Diagonals
        (0..3).all(|i| self.cells[i][i] == filled) || (0..3).all(|i| self.cells[i][2 - i] == filled)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Empty positions in row-major order. The search breaks ties by this
    /// order, so it must not change.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(9);
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Filled(mark))
            .count()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_winner(Mark::Player) {
            Outcome::PlayerWin
        } else if self.is_winner(Mark::Computer) {
            Outcome::ComputerWin
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Board {
    type Action = (usize, usize);
    type Player = Mark;

    fn place(&mut self, (row, col): (usize, usize), mark: Mark) -> anyhow::Result<()> {
        Board::place(self, row, col, mark)?;
        Ok(())
    }

    fn clear(&mut self, (row, col): (usize, usize)) {
        Board::clear(self, row, col)
    }

    fn get_available_moves(&self) -> Vec<(usize, usize)> {
        self.empty_cells()
    }

    fn is_winner(&self, mark: Mark) -> bool {
        Board::is_winner(self, mark)
    }

    fn is_full(&self) -> bool {
        Board::is_full(self)
    }
}

/// Parses nine cells, ignoring whitespace: `X` for the player, `O` for the
/// computer, `.` for empty. The result must be reachable by alternating play
/// with the player moving first.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != 9 {
            return Err(Error::InvalidBoard {
                reason: format!("expected 9 cells, got {}", symbols.len()),
            });
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Filled(Mark::Player),
                'O' => Cell::Filled(Mark::Computer),
                '.' => Cell::Empty,
                other => {
                    return Err(Error::InvalidBoard {
                        reason: format!("unexpected '{}' at cell {}", other, index),
                    })
                }
            };
            board.cells[index / 3][index % 3] = cell;
        }

        let player = board.count(Mark::Player);
        let computer = board.count(Mark::Computer);
        if player != computer && player != computer + 1 {
            return Err(Error::InvalidMarkCounts { player, computer });
        }
        if board.is_winner(Mark::Player) && board.is_winner(Mark::Computer) {
            return Err(Error::BothWinners);
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Filled(mark) => mark.symbol(),
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
