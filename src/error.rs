use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Error {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds (rows and columns are 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid board text: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid mark counts: player={player}, computer={computer} (player must be equal or one ahead)")]
    InvalidMarkCounts { player: usize, computer: usize },

    #[error("both sides have three in a row")]
    BothWinners,
}
