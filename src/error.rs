//! Error types for chic-rules

use crate::chess_board::{ChessField, Color, Move};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid move notation: {0}")]
    InvalidMove(String),

    #[error("Invalid FEN string: {0}")]
    Fen(String),

    #[error("No piece on {0}")]
    EmptySquare(ChessField),

    #[error("The piece on {0} belongs to the opponent")]
    NotYourPiece(ChessField),

    #[error("It is {expected}'s turn")]
    NotYourTurn { expected: Color },

    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    #[error("{0} has no king on the board")]
    MissingKing(Color),

    #[error("The game is already over")]
    GameOver,

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;

impl From<std::io::Error> for ChessError {
    fn from(e: std::io::Error) -> Self {
        ChessError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_converted() {
        let e: ChessError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert_eq!(e, ChessError::Io("stdout closed".to_string()));
        assert_eq!(e.to_string(), "I/O error: stdout closed");
    }
}
