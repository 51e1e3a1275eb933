use super::{ChessBoard, ChessField, Color, Piece, PieceType, BOARD_SIZE};
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::sync::Arc;

pub struct ZobristHash {
    piece_keys: [[[u64; BOARD_SIZE * BOARD_SIZE]; 6]; 2],
    side_to_move_key: u64,
}

impl ZobristHash {
    fn new(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);

        // Random numbers for pieces on squares
        let mut piece_keys = [[[0; BOARD_SIZE * BOARD_SIZE]; 6]; 2];
        for color_keys in &mut piece_keys {
            for piece_type_keys in color_keys {
                for square_key in piece_type_keys {
                    *square_key = rng.gen();
                }
            }
        }

        let side_to_move_key = rng.gen();

        ZobristHash {
            piece_keys,
            side_to_move_key,
        }
    }

    pub fn piece_key(&self, piece: Piece, field: ChessField) -> u64 {
        let color_index = match piece.color {
            Color::White => 0,
            Color::Black => 1,
        };
        let piece_index = match piece.kind {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        };
        let square_index = field.row as usize * BOARD_SIZE + field.col as usize;
        self.piece_keys[color_index][piece_index][square_index]
    }

    pub fn side_to_move_key(&self) -> u64 {
        self.side_to_move_key
    }

    pub fn calculate_hash(&self, board: &ChessBoard) -> u64 {
        let mut hash = board
            .all_pieces_with_coordinates()
            .fold(0, |hash, (field, piece)| hash ^ self.piece_key(piece, field));

        if board.active_color == Color::Black {
            hash ^= self.side_to_move_key;
        }

        hash
    }
}

lazy_static! {
    pub static ref ZOBRIST: Arc<ZobristHash> = Arc::new(ZobristHash::new(42));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_move_changes_hash() {
        let white = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let black = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(white.hash, black.hash);
        assert_eq!(white.hash ^ black.hash, ZOBRIST.side_to_move_key());
    }

    #[test]
    fn test_hash_matches_between_fen_and_new_game() {
        let from_fen = ChessBoard::from_fen(super::super::fen::INITIAL_POSITION).unwrap();
        assert_eq!(from_fen.hash, ChessBoard::new_game().hash);
        assert_ne!(from_fen.hash, 0);
    }

    #[test]
    fn test_hash_recursive() {
        fn check_hash_recursive(board: &ChessBoard, depth: u8) {
            if depth == 0 {
                return;
            }
            for mv in board.generate_legal_moves(board.active_color) {
                let mut new_board = board.clone();
                new_board.make_move(mv);
                assert_eq!(new_board.hash, ZOBRIST.calculate_hash(&new_board), "after {}", mv);
                check_hash_recursive(&new_board, depth - 1);
            }
        }

        let board = ChessBoard::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w - - 0 1").unwrap();
        check_hash_recursive(&board, 2);
    }
}
