use crate::chess_board::{ChessBoard, Color, Move};

pub mod engine_random;
pub use engine_random::RandomCaptureEngine;

/// An automated opponent. Engines run synchronously; any delay before a reply belongs to the
/// caller.
pub trait ChessEngine {
    fn name(&self) -> &str;
    fn author(&self) -> &str;

    /// Picks a move for `color` without touching the board. `None` when `color` cannot move.
    fn choose_move(&mut self, board: &ChessBoard, color: Color) -> Option<Move>;

    /// Picks a move for `color` and plays it on `board`. Leaves the board alone when there is
    /// nothing to play.
    fn choose_and_apply_move(&mut self, board: &mut ChessBoard, color: Color) -> Option<Move> {
        let mv = self.choose_move(board, color)?;
        board.make_move(mv);
        Some(mv)
    }
}
