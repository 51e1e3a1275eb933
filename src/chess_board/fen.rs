use super::ChessBoard;
use super::{Color, Piece, PieceType, Square, BOARD_SIZE};
use crate::error::{ChessError, Result};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parses a FEN string and sets up a ChessBoard.
///
/// Only piece placement and the active color are used. Castling, en passant and the clocks
/// may be present but are ignored. The first rank in the string is row 0.
pub fn from_fen(fen: &str) -> Result<ChessBoard> {
    let mut board = ChessBoard::new();
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 6 {
        return Err(ChessError::Fen(format!("expected 2 to 6 fields, got {}", parts.len())));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessError::Fen(format!("expected 8 rows, got {}", rows.len())));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index >= BOARD_SIZE {
                return Err(ChessError::Fen(format!("too many squares in row {}", row_index)));
            }
            if let Some(skip) = c.to_digit(10) {
                col_index += skip as usize;
            } else if let Some(piece) = Piece::from_char(c) {
                board.squares[row_index][col_index] = Square::Occupied(piece);
                col_index += 1;
            } else {
                return Err(ChessError::Fen(format!("invalid piece character: {}", c)));
            }
        }
        if col_index != BOARD_SIZE {
            return Err(ChessError::Fen(format!("row {} covers {} squares", row_index, col_index)));
        }
    }

    board.active_color = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(ChessError::Fen(format!("invalid active color: {}", other))),
    };

    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_with_coordinates(color)
            .filter(|(_, piece)| piece.kind == PieceType::King)
            .count();
        if kings > 1 {
            return Err(ChessError::Fen(format!("{} has {} kings", color, kings)));
        }
    }

    Ok(board)
}

pub fn to_fen(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for (row_index, row) in board.squares.iter().enumerate() {
        let mut empty_count = 0;

        for square in row {
            match square {
                Square::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row_index < BOARD_SIZE - 1 {
            board_representation.push('/');
        }
    }

    let active_color = if board.active_color == Color::White { "w" } else { "b" };

    format!("{} {} - - 0 1", board_representation, active_color)
}
