pub mod chess_board;
pub mod engines;
pub mod error;
pub mod game;
pub mod ui;

pub use chess_board::{ChessBoard, ChessField, Color, Move, Piece, PieceType, Square};
pub use error::{ChessError, Result};
pub use game::{Game, GameStatus, TurnReport};
