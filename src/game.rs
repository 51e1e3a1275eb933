//! Game session
//!
//! Holds the single board of a game and drives it the way a front-end does: a human move is
//! validated and applied, the engine answers when asked, and after every move the side now to
//! play is checked for check, mate or a lost king. Timing stays with the front-end.

use crate::chess_board::{ChessBoard, ChessField, Color, Move, Piece};
use crate::engines::ChessEngine;
use crate::error::{ChessError, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    /// `loser` has no move that leaves its king safe. Also covers having no move at all.
    Checkmate { loser: Color },
    /// A king was taken after its side left it en prise.
    KingCaptured { winner: Color },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::KingCaptured { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { loser } => Some(loser.opposite()),
            GameStatus::KingCaptured { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Notification text for the front-end, if the status deserves one.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Check(color) => Some(format!("{} is in check!", color)),
            GameStatus::Checkmate { loser } => Some(format!("Checkmate! {} wins!", loser.opposite())),
            GameStatus::KingCaptured { winner } => Some(format!("King captured! {} wins!", winner)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub mover: Color,
    pub mv: Move,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

pub struct Game<E: ChessEngine> {
    board: ChessBoard,
    human: Option<Color>,
    engine: E,
    status: GameStatus,
}

impl<E: ChessEngine> Game<E> {
    /// Starts from the initial layout. With `human` set to `None` the engine plays both sides.
    pub fn new(human: Option<Color>, engine: E) -> Self {
        Self {
            board: ChessBoard::new_game(),
            human,
            engine,
            status: GameStatus::Ongoing,
        }
    }

    /// Continues from an arbitrary position. Both kings must be on the board.
    pub fn from_board(board: ChessBoard, human: Option<Color>, engine: E) -> Result<Self> {
        for color in [Color::White, Color::Black] {
            if board.find_king_position(color).is_none() {
                return Err(ChessError::MissingKing(color));
            }
        }
        let status = Self::evaluate(&board, board.active_color);
        Ok(Self {
            board,
            human,
            engine,
            status,
        })
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn human(&self) -> Option<Color> {
        self.human
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn side_to_move(&self) -> Color {
        self.board.active_color
    }

    pub fn is_human_turn(&self) -> bool {
        !self.status.is_over() && self.human == Some(self.board.active_color)
    }

    /// Only the human's own pieces can be picked up, and only on the human's turn.
    pub fn selectable(&self, field: ChessField) -> bool {
        self.is_human_turn() && matches!(self.board.piece_at(field), Some(piece) if piece.color == self.board.active_color)
    }

    pub fn legal_destinations(&self, field: ChessField) -> Vec<ChessField> {
        if !self.selectable(field) {
            return Vec::new();
        }
        self.board
            .generate_legal_moves_from(field)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    pub fn play_human_move(&mut self, mv: Move) -> Result<TurnReport> {
        self.ensure_running()?;
        let color = self.board.active_color;
        if self.human != Some(color) {
            return Err(ChessError::NotYourTurn { expected: color });
        }
        let piece = self.board.piece_at(mv.from).ok_or(ChessError::EmptySquare(mv.from))?;
        if piece.color != color {
            return Err(ChessError::NotYourPiece(mv.from));
        }
        if !self.board.is_legal_move(Some(piece), mv.from, mv.to) {
            return Err(ChessError::IllegalMove(mv));
        }
        Ok(self.apply(mv))
    }

    /// Lets the engine play the side to move. `Ok(None)` when that side has no move at all.
    pub fn play_engine_move(&mut self) -> Result<Option<TurnReport>> {
        self.ensure_running()?;
        let color = self.board.active_color;
        if let Some(human) = self.human.filter(|&human| human == color) {
            return Err(ChessError::NotYourTurn { expected: human });
        }
        match self.engine.choose_move(&self.board, color) {
            Some(mv) => Ok(Some(self.apply(mv))),
            None => {
                self.status = GameStatus::Checkmate { loser: color };
                info!(%color, "no move left");
                Ok(None)
            }
        }
    }

    fn ensure_running(&self) -> Result<()> {
        if self.status.is_over() {
            Err(ChessError::GameOver)
        } else {
            Ok(())
        }
    }

    fn apply(&mut self, mv: Move) -> TurnReport {
        let mover = self.board.active_color;
        let captured = self.board.make_move(mv);
        let previous = self.status;
        self.status = Self::evaluate(&self.board, mover.opposite());
        debug!(%mover, mv = %mv, captured = ?captured.map(|piece| piece.to_char()), "move played");
        if self.status != previous {
            info!(status = ?self.status, hash = self.board.hash, "game status changed");
        }
        TurnReport {
            mover,
            mv,
            captured,
            status: self.status,
        }
    }

    /// Status from the point of view of `color`, the side about to move.
    fn evaluate(board: &ChessBoard, color: Color) -> GameStatus {
        if board.find_king_position(color).is_none() {
            GameStatus::KingCaptured { winner: color.opposite() }
        } else if board.is_checkmate(color) {
            GameStatus::Checkmate { loser: color }
        } else if board.is_in_check(color) {
            GameStatus::Check(color)
        } else {
            GameStatus::Ongoing
        }
    }
}
