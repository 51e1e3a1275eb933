//! Capture-first random engine
//!
//! Collects every legal move of the side to play, prefers a random capture and falls back to
//! a random quiet move. No lookahead, no evaluation.

use crate::chess_board::{ChessBoard, Color, Move};
use crate::engines::ChessEngine;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

pub struct RandomCaptureEngine<R = Pcg64> {
    rng: R,
}

impl RandomCaptureEngine<Pcg64> {
    /// Deterministic engine: the same seed replays the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Pcg64::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(Pcg64::from_entropy())
    }
}

impl<R: Rng> RandomCaptureEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChessEngine for RandomCaptureEngine<R> {
    fn name(&self) -> &str {
        "Chic Random Capture Engine"
    }

    fn author(&self) -> &str {
        "chic-rules contributors"
    }

    fn choose_move(&mut self, board: &ChessBoard, color: Color) -> Option<Move> {
        let (captures, quiet) = board.generate_moves_partitioned(color);
        let chosen = captures
            .choose(&mut self.rng)
            .or_else(|| quiet.choose(&mut self.rng))
            .copied();

        debug!(
            engine = self.name(),
            %color,
            captures = captures.len(),
            quiet = quiet.len(),
            chosen = ?chosen.map(|mv| mv.as_algebraic()),
            "engine move"
        );
        chosen
    }
}
