use crate::chess_board::{ChessBoard, ChessField, BOARD_SIZE};

/// One cell of the rendered board, row-major from a8 to h1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub symbol: Option<char>,
    pub light: bool,
    pub highlighted: bool,
}

/// Maps a `ChessBoard` to the 64 cells a front-end draws
pub fn map_chessboard_to_ui(chess_board: &ChessBoard, highlights: &[ChessField]) -> Vec<Field> {
    ChessField::all()
        .map(|field| Field {
            symbol: chess_board.piece_at(field).map(|piece| piece.symbol()),
            light: (field.row + field.col) % 2 == 0,
            highlighted: highlights.contains(&field),
        })
        .collect()
}

/// Text grid with rank 8 on top. Pieces use their FEN letters, highlighted fields are bracketed.
pub fn render_board(chess_board: &ChessBoard, highlights: &[ChessField]) -> String {
    let mut board_representation = String::new();
    board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
    board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        board_representation.push_str(&format!("{} │", rank));
        for col in 0..BOARD_SIZE {
            let field = ChessField::new(row as u8, col as u8);
            let square = chess_board.piece_at(field).map_or(' ', |piece| piece.to_char());
            if highlights.contains(&field) {
                let mark = if square == ' ' { '·' } else { square };
                board_representation.push_str(&format!("[{}]│", mark));
            } else {
                board_representation.push_str(&format!(" {} │", square));
            }
        }
        board_representation.push_str(&format!(" {}\n", rank));

        if row + 1 < BOARD_SIZE {
            board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
        }
    }

    board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
    board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

    board_representation
}
