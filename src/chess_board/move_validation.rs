use super::{ChessBoard, ChessField, Color, Move, Piece, PieceType, Square};

impl ChessBoard {
    /// Checks `mv` for the piece currently standing on `mv.from`.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_move(self.piece_at(mv.from), mv.from, mv.to)
    }

    /// Decides whether `piece` may move from `from` to `to` on this board.
    ///
    /// Never fails: a missing piece, an off-board field, a null move or a destination held by
    /// the same side all answer `false`.
    ///
    /// Whether the mover's own king is left under attack is deliberately NOT checked, so a
    /// move that walks into check, or ignores one, is accepted.
    pub fn is_legal_move(&self, piece: Option<Piece>, from: ChessField, to: ChessField) -> bool {
        let Some(piece) = piece else {
            return false;
        };
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        let target = self.piece_at(to);
        if matches!(target, Some(t) if t.color == piece.color) {
            return false;
        }

        let dr = to.row as i8 - from.row as i8;
        let dc = to.col as i8 - from.col as i8;

        match piece.kind {
            PieceType::Pawn => self.is_legal_pawn_move(piece.color, from, dr, dc, target),
            PieceType::Rook => (dr == 0 || dc == 0) && self.is_path_clear(from, to),
            PieceType::Knight => matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2)),
            PieceType::Bishop => dr.abs() == dc.abs() && self.is_path_clear(from, to),
            PieceType::Queen => (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && self.is_path_clear(from, to),
            PieceType::King => dr.abs() <= 1 && dc.abs() <= 1,
        }
    }

    // `target` is known not to hold a piece of `color`.
    fn is_legal_pawn_move(&self, color: Color, from: ChessField, dr: i8, dc: i8, target: Option<Piece>) -> bool {
        let forward = color.pawn_direction();
        match (dc.abs(), target) {
            (0, None) if dr == forward => true,
            (0, None) if dr == 2 * forward => {
                let skipped = ChessField::new((from.row as i8 + forward) as u8, from.col);
                from.row == color.pawn_start_row() && self.piece_at(skipped).is_none()
            }
            (1, Some(_)) => dr == forward,
            _ => false,
        }
    }

    /// Walks from `from` towards `to` one step at a time; both endpoints are excluded.
    /// Only meaningful for straight or diagonal lines.
    fn is_path_clear(&self, from: ChessField, to: ChessField) -> bool {
        let dr = (to.row as i8 - from.row as i8).signum();
        let dc = (to.col as i8 - from.col as i8).signum();

        let mut row = from.row as i8 + dr;
        let mut col = from.col as i8 + dc;
        while (row, col) != (to.row as i8, to.col as i8) {
            if self.squares[row as usize][col as usize] != Square::Empty {
                return false;
            }
            row += dr;
            col += dc;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::assert_moves;
    use super::*;

    const ALL_KINDS: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    fn field(algebraic: &str) -> ChessField {
        ChessField::from_algebraic(algebraic).unwrap()
    }

    fn legal(board: &ChessBoard, mv: &str) -> bool {
        board.is_legal(Move::from_algebraic(mv).unwrap())
    }

    #[test]
    fn test_absent_piece_is_never_legal() {
        let board = ChessBoard::new_game();
        assert!(!board.is_legal_move(None, field("e2"), field("e4")));
        assert!(!legal(&board, "e4e5"));
    }

    #[test]
    fn test_off_board_destination_is_never_legal() {
        let board = ChessBoard::new();
        let from = field("d4");
        for color in [Color::White, Color::Black] {
            for kind in ALL_KINDS {
                let piece = Some(Piece::new(color, kind));
                for to in [ChessField::new(8, 3), ChessField::new(3, 8), ChessField::new(8, 8), ChessField::new(200, 0)] {
                    assert!(!board.is_legal_move(piece, from, to), "{:?} {:?} to {:?}", color, kind, to);
                }
                assert!(!board.is_legal_move(piece, ChessField::new(9, 0), ChessField::new(7, 0)));
            }
        }
    }

    #[test]
    fn test_same_side_destination_is_never_legal() {
        // Every neighbour and knight jump of d4 holds a piece of the same color.
        let mut board = ChessBoard::new();
        let from = field("d4");
        for color in [Color::White, Color::Black] {
            for to in ChessField::all().filter(|f| *f != from) {
                board.squares[to.row as usize][to.col as usize] = Square::Occupied(Piece::new(color, PieceType::Pawn));
            }
            for kind in ALL_KINDS {
                for to in ChessField::all() {
                    assert!(!board.is_legal_move(Some(Piece::new(color, kind)), from, to));
                }
            }
        }
    }

    #[test]
    fn test_null_move_is_never_legal() {
        let board = ChessBoard::new();
        for kind in ALL_KINDS {
            assert!(!board.is_legal_move(Some(Piece::new(Color::White, kind)), field("d4"), field("d4")));
        }
    }

    #[test]
    fn test_pawn_moves() {
        let board = ChessBoard::from_fen("8/8/8/8/8/p1p5/1P6/8 w - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("b2")).into_iter(), vec!["b2b3", "b2b4", "b2a3", "b2c3"]);

        // Black walks towards row 7 and captures diagonally forward only
        let board = ChessBoard::from_fen("8/1p6/P1P5/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("b7")).into_iter(), vec!["b7b6", "b7b5", "b7a6", "b7c6"]);

        // No capture straight ahead, no diagonal step without a capture
        let board = ChessBoard::from_fen("8/8/8/8/4p3/4P3/8/8 w - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("e3")).into_iter(), vec![]);

        // No backwards step
        assert!(!legal(&ChessBoard::from_fen("8/8/8/8/4P3/8/8/8 w - - 0 1").unwrap(), "e4e3"));
    }

    #[test]
    fn test_pawn_double_advance_only_from_home_row() {
        let board = ChessBoard::new_game();
        assert!(legal(&board, "e2e4"));
        assert!(legal(&board, "e7e5"));

        let board = ChessBoard::from_fen("8/8/8/8/8/4P3/8/8 w - - 0 1").unwrap();
        assert!(!legal(&board, "e3e5"));
        let board = ChessBoard::from_fen("8/8/4p3/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!legal(&board, "e6e4"));

        // Three or more steps are never allowed
        let board = ChessBoard::from_fen("8/8/8/8/8/8/4P3/8 w - - 0 1").unwrap();
        assert!(!legal(&board, "e2e5"));
    }

    #[test]
    fn test_pawn_double_advance_needs_both_squares_empty() {
        // blocked on the skipped square
        let board = ChessBoard::from_fen("8/8/8/8/8/4n3/4P3/8 w - - 0 1").unwrap();
        assert!(!legal(&board, "e2e4"));
        // blocked on the destination
        let board = ChessBoard::from_fen("8/8/8/8/4n3/8/4P3/8 w - - 0 1").unwrap();
        assert!(!legal(&board, "e2e4"));
        assert!(legal(&board, "e2e3"));
        // same for Black
        let board = ChessBoard::from_fen("8/4p3/4N3/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!legal(&board, "e7e5"));
        let board = ChessBoard::from_fen("8/4p3/8/4N3/8/8/8/8 b - - 0 1").unwrap();
        assert!(!legal(&board, "e7e5"));
        assert!(legal(&board, "e7e6"));
    }

    #[test]
    fn test_knight_moves_ignore_blockers() {
        let board = ChessBoard::from_fen("8/8/8/8/3N4/8/8/8 w - - 0 1").unwrap();
        assert_moves(
            board.generate_legal_moves_from(field("d4")).into_iter(),
            vec!["d4b3", "d4c2", "d4e2", "d4f3", "d4f5", "d4e6", "d4c6", "d4b5"],
        );

        // Fully surrounded knight still jumps
        let board = ChessBoard::from_fen("8/8/8/2ppp3/2pNp3/2ppp3/8/8 w - - 0 1").unwrap();
        assert_moves(
            board.generate_legal_moves_from(field("d4")).into_iter(),
            vec!["d4b3", "d4c2", "d4e2", "d4f3", "d4f5", "d4e6", "d4c6", "d4b5"],
        );

        let board = ChessBoard::from_fen("8/8/8/1rn5/2r5/N7/2B5/1Q6 w - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("a3")).into_iter(), vec!["a3c4", "a3b5"]);
    }

    #[test]
    fn test_bishop_moves() {
        let board = ChessBoard::from_fen("8/6r1/5B2/8/3P4/8/8/8 w - - 0 1").unwrap();
        assert_moves(
            board.generate_legal_moves_from(field("f6")).into_iter(),
            vec!["f6d8", "f6e7", "f6g5", "f6h4", "f6e5", "f6g7"],
        );
    }

    #[test]
    fn test_rook_moves() {
        let board = ChessBoard::from_fen("8/8/8/8/3bR3/8/4N3/8 w - - 0 1").unwrap();
        assert_moves(
            board.generate_legal_moves_from(field("e4")).into_iter(),
            vec!["e4e3", "e4e5", "e4e6", "e4e7", "e4e8", "e4d4", "e4f4", "e4g4", "e4h4"],
        );
    }

    #[test]
    fn test_queen_moves() {
        let board = ChessBoard::from_fen("4b1b1/6b1/4r1Q1/5P2/6B1/8/8/8 w - - 0 1").unwrap();
        assert_moves(
            board.generate_legal_moves_from(field("g6")).into_iter(),
            vec!["g6e8", "g6f7", "g6e6", "g6f6", "g6g7", "g6g5", "g6h5", "g6h6", "g6h7"],
        );
    }

    #[test]
    fn test_sliding_pieces_never_pass_an_occupied_square() {
        for blocker in ['P', 'p'] {
            let board = ChessBoard::from_fen(&format!("8/8/8/8/8/8/1{}6/R1Q1B3 w - - 0 1", blocker)).unwrap();
            // rook a1 up the file is free, across the rank it stops at c1
            assert!(legal(&board, "a1a8"));
            assert!(!legal(&board, "a1d1"));
            // queen c1 diagonal through b2 is blocked, bishop e1 through nothing
            assert!(!legal(&board, "c1a3"));
            assert!(legal(&board, "e1h4"));
            // bishop e1 to a5 passes b4..d2, all empty
            assert!(legal(&board, "e1a5"));
        }

        let board = ChessBoard::from_fen("8/8/8/3p4/8/8/8/3Q4 w - - 0 1").unwrap();
        assert!(legal(&board, "d1d5"));
        assert!(!legal(&board, "d1d6"));
        assert!(!legal(&board, "d1d8"));
    }

    #[test]
    fn test_queen_cannot_move_like_a_knight() {
        let board = ChessBoard::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").unwrap();
        assert!(!legal(&board, "d4e6"));
        assert!(!legal(&board, "d4f5"));
    }

    #[test]
    fn test_king_moves() {
        let board = ChessBoard::from_fen("8/8/8/3ppp2/3PKP2/3PPP2/8/8 w - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("e4")).into_iter(), vec!["e4d5", "e4e5", "e4f5"]);

        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/7k b - - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("h1")).into_iter(), vec!["h1h2", "h1g1", "h1g2"]);

        // no castling
        let board = ChessBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        assert_moves(board.generate_legal_moves_from(field("e1")).into_iter(), vec!["e1d1", "e1f1"]);
    }

    #[test]
    fn test_moving_into_check_is_accepted() {
        // d1 is covered by the rook on d8, yet the king may step there.
        let board = ChessBoard::from_fen("3r4/8/8/8/8/8/4B3/4K2r w - - 0 1").unwrap();
        assert!(legal(&board, "e1d1"));
        assert!(legal(&board, "e2d3"));
        // already in check along the first rank, an unrelated move is still fine
        assert!(board.is_in_check(Color::White));
        assert!(legal(&board, "e2b5"));
    }
}
