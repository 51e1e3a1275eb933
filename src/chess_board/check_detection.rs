use super::{ChessBoard, ChessField, Color};

impl ChessBoard {
    /// A side is in check when any enemy piece could legally move onto its king's square.
    ///
    /// # Panics
    /// If `color` has no king on the board.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.king_position(color);
        self.is_square_attacked_by_color(king, color.opposite())
    }

    /// Whether some piece of `attacker` could legally move onto `field`.
    ///
    /// Pawns only count diagonally when `field` holds a piece of the other color, so this is
    /// meant for occupied fields.
    pub fn is_square_attacked_by_color(&self, field: ChessField, attacker: Color) -> bool {
        self.pieces_with_coordinates(attacker)
            .any(|(from, piece)| self.is_legal_move(Some(piece), from, field))
    }

    /// `color` is mated when none of its legal moves leaves its king unattacked.
    ///
    /// Being in check right now is not required: a side with no legal move at all counts as
    /// mated, so stalemate is reported as checkmate as well.
    ///
    /// Each candidate is tried on one scratch copy of the board and reverted before the next.
    /// Up to 64 x 64 validator calls per query; fine for an 8x8 board only.
    ///
    /// # Panics
    /// If `color` has no king on the board.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.king_position(color);

        let mut scratch = self.clone();
        for mv in self.generate_legal_moves(color) {
            let trial = scratch.trial_move(mv);
            if !trial.is_in_check(color) {
                return false;
            }
        }
        true
    }

    fn king_position(&self, color: Color) -> ChessField {
        match self.find_king_position(color) {
            Some(field) => field,
            None => panic!("{} has no king on the board:\n{}", color, self.to_fen()),
        }
    }
}
