pub mod fen;
pub mod zobrist_hash;
pub use zobrist_hash::ZobristHash;
pub use zobrist_hash::ZOBRIST;
pub mod model;
pub use model::{ChessField, Color, Move, Piece, PieceType, Square, BOARD_SIZE};

mod check_detection;
mod chess_board;
mod move_generation;
mod move_validation;
#[cfg(test)]
pub(crate) mod test_utils;
pub use chess_board::{ChessBoard, TrialMove};
