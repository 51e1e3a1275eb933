use super::{ChessBoard, ChessField, Color, Move};

impl ChessBoard {
    /// Every move `color` can make, ordered by origin and then destination, both row by row.
    pub fn generate_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut legal_moves = Vec::with_capacity(64);
        for (from, piece) in self.pieces_with_coordinates(color) {
            legal_moves.extend(
                ChessField::all()
                    .filter(|&to| self.is_legal_move(Some(piece), from, to))
                    .map(|to| Move::between(from, to)),
            );
        }
        legal_moves
    }

    /// Moves of whatever piece stands on `from`, regardless of whose turn it is.
    pub fn generate_legal_moves_from(&self, from: ChessField) -> Vec<Move> {
        let piece = self.piece_at(from);
        ChessField::all()
            .filter(|&to| self.is_legal_move(piece, from, to))
            .map(|to| Move::between(from, to))
            .collect()
    }

    /// True if the destination holds a piece of the other side than the mover.
    pub fn is_capture(&self, mv: Move) -> bool {
        match (self.piece_at(mv.from), self.piece_at(mv.to)) {
            (Some(moving), Some(target)) => moving.color != target.color,
            _ => false,
        }
    }

    /// Legal moves of `color` split into `(captures, quiet moves)`, each keeping generation order.
    pub fn generate_moves_partitioned(&self, color: Color) -> (Vec<Move>, Vec<Move>) {
        self.generate_legal_moves(color)
            .into_iter()
            .partition(|&mv| self.is_capture(mv))
    }
}
