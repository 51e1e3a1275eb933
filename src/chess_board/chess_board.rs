use super::zobrist_hash::ZOBRIST;
use super::{fen, ChessField, Color, Move, Piece, PieceType, Square, BOARD_SIZE};
use crate::error::Result;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub active_color: Color,
    pub hash: u64,
}

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
            active_color: Color::White,
            hash: 0,
        }
    }

    /// Standard starting layout: Black on rows 0 and 1, White on rows 6 and 7, White to move.
    pub fn new_game() -> Self {
        let mut board = Self::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Square::Occupied(Piece::new(Color::Black, kind));
            board.squares[1][col] = Square::Occupied(Piece::new(Color::Black, PieceType::Pawn));
            board.squares[6][col] = Square::Occupied(Piece::new(Color::White, PieceType::Pawn));
            board.squares[7][col] = Square::Occupied(Piece::new(Color::White, kind));
        }
        board.hash = ZOBRIST.calculate_hash(&board);
        board
    }

    /// Delegates FEN parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<Self> {
        fen::from_fen(fen).map(|mut board| {
            board.hash = ZOBRIST.calculate_hash(&board);
            board
        })
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }

    /// The occupant of `field`, or `None` for an empty or off-board field.
    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        if !field.is_on_board() {
            return None;
        }
        self.squares[field.row as usize][field.col as usize].piece()
    }

    /// Returns an iterator over the pieces of `color` along with their coordinates, row by row.
    pub fn pieces_with_coordinates(&self, color: Color) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        self.all_pieces_with_coordinates()
            .filter(move |(_, piece)| piece.color == color)
    }

    pub fn all_pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ChessField::all().filter_map(move |field| self.piece_at(field).map(|piece| (field, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.all_pieces_with_coordinates().count()
    }

    pub fn find_king_position(&self, color: Color) -> Option<ChessField> {
        self.pieces_with_coordinates(color)
            .find(|(_, piece)| piece.kind == PieceType::King)
            .map(|(field, _)| field)
    }

    /// Relocates the occupant of `mv.from` onto `mv.to`, clears `mv.from` and hands the turn
    /// to the opponent of the side that moved, whoever was on move before. Legality is not
    /// checked here; callers validate first.
    /// Returns the captured piece, if any.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let (from_row, from_col) = (mv.from.row as usize, mv.from.col as usize);
        let (to_row, to_col) = (mv.to.row as usize, mv.to.col as usize);

        let Square::Occupied(piece) = self.squares[from_row][from_col] else {
            debug_assert!(false, "make_move from empty square {}", mv.from);
            return None;
        };
        let captured = self.squares[to_row][to_col].piece();

        let zobrist = &*ZOBRIST;
        let mut hash = self.hash;
        hash ^= zobrist.piece_key(piece, mv.from);
        if let Some(captured) = captured {
            hash ^= zobrist.piece_key(captured, mv.to);
        }
        hash ^= zobrist.piece_key(piece, mv.to);
        let next = piece.color.opposite();
        if next != self.active_color {
            hash ^= zobrist.side_to_move_key();
        }

        self.squares[to_row][to_col] = Square::Occupied(piece);
        self.squares[from_row][from_col] = Square::Empty;
        self.active_color = next;
        self.hash = hash;

        captured
    }

    /// Plays `mv` on the board until the returned guard is dropped. Both fields must be on
    /// the board.
    pub fn trial_move(&mut self, mv: Move) -> TrialMove<'_> {
        TrialMove::new(self, mv)
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::ui::render_board(self, &[]))
    }
}

/// A hypothetical move. The board shows the moved piece while the guard lives and gets both
/// squares back on drop, whichever way the scope is left. Turn and hash are not touched.
pub struct TrialMove<'a> {
    board: &'a mut ChessBoard,
    mv: Move,
    from: Square,
    to: Square,
}

impl<'a> TrialMove<'a> {
    fn new(board: &'a mut ChessBoard, mv: Move) -> Self {
        assert!(
            mv.from.is_on_board() && mv.to.is_on_board(),
            "trial move {:?} leaves the board",
            mv
        );
        let from = board.squares[mv.from.row as usize][mv.from.col as usize];
        let to = board.squares[mv.to.row as usize][mv.to.col as usize];
        board.squares[mv.to.row as usize][mv.to.col as usize] = from;
        board.squares[mv.from.row as usize][mv.from.col as usize] = Square::Empty;
        Self { board, mv, from, to }
    }

    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for TrialMove<'_> {
    type Target = ChessBoard;

    fn deref(&self) -> &ChessBoard {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.squares[self.mv.from.row as usize][self.mv.from.col as usize] = self.from;
        self.board.squares[self.mv.to.row as usize][self.mv.to.col as usize] = self.to;
    }
}
