//! Explicit game value threaded through a driver loop.
//!
//! `Game` owns the board, the side to move and the ply history. Drivers call
//! `play` or `pass` and read the result back instead of sharing a mutable
//! global; the board itself stays a plain `Copy` value that search can
//! snapshot freely.

use crate::game_state::board::Board;
use crate::game_state::othello_types::*;
use crate::othello_errors::{OthelloError, OthelloResult};

/// One entry in the game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    Place { color: Color, mv: Move },
    Pass(Color),
}

impl Ply {
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Ply::Place { color, .. } | Ply::Pass(color) => color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    pub fn from_score(black: u32, white: u32) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::BlackWins,
            std::cmp::Ordering::Less => Outcome::WhiteWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub const fn result_tag(self) -> &'static str {
        match self {
            Outcome::BlackWins => "1-0",
            Outcome::WhiteWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub side_to_move: Color,
    pub history: Vec<Ply>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starting position, Black to move.
    pub fn new() -> Self {
        Self::from_position(Board::new_game(), Color::Black)
    }

    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.valid_moves(self.side_to_move)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// `None` while either side can still move.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let (black, white) = self.board.score();
        Some(Outcome::from_score(black, white))
    }

    /// Place a disc for the side to move, then hand the turn over.
    pub fn play(&mut self, mv: Move) -> OthelloResult<()> {
        if self.is_over() {
            return Err(OthelloError::GameOver);
        }
        let color = self.side_to_move;
        self.board.apply_move(mv, color)?;
        self.history.push(Ply::Place { color, mv });
        self.side_to_move = color.opposite();
        Ok(())
    }

    /// Forfeit the turn. Only allowed when the side to move has no placement.
    pub fn pass(&mut self) -> OthelloResult<()> {
        if self.is_over() {
            return Err(OthelloError::GameOver);
        }
        let color = self.side_to_move;
        if self.board.has_valid_move(color) {
            return Err(OthelloError::PassWithLegalMoves(color));
        }
        self.history.push(Ply::Pass(color));
        self.side_to_move = color.opposite();
        Ok(())
    }

    /// Play `mv` if given, otherwise pass. Mirrors the driver loop's
    /// "move or skip" step.
    pub fn play_or_pass(&mut self, mv: Option<Move>) -> OthelloResult<()> {
        match mv {
            Some(mv) => self.play(mv),
            None => self.pass(),
        }
    }

    /// Number of placements so far (passes excluded).
    pub fn placements(&self) -> usize {
        self.history
            .iter()
            .filter(|p| matches!(p, Ply::Place { .. }))
            .count()
    }
}
