//! Errors used throughout the Othello engine.
//!
//! `OthelloError` is the single error type returned by board mutation, game
//! flow, configuration parsing and notation helpers. Every failure is local
//! and synchronous; nothing in the crate performs I/O that could fail
//! transiently, so no variant is meant to be retried.
//!
//! Usage guidelines:
//! - Input and configuration variants (`InvalidDepth`, `UnknownHeuristic`,
//!   `InvalidNotation`, `OutOfBounds`) are suitable for presenting to users.
//! - Game-flow variants (`IllegalMove`, `NoLegalMoves`, `PassWithLegalMoves`,
//!   `GameOver`) indicate a caller tried an action the rules do not allow in
//!   the current position.

use std::error::Error;
use std::fmt;

use crate::game_state::othello_types::{Color, Move};

pub type OthelloResult<T> = Result<T, OthelloError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// Row or column outside `0..=7`.
    OutOfBounds { row: u8, col: u8 },

    /// The target cell is occupied or placing there flips nothing.
    IllegalMove { mv: Move, color: Color },

    /// Search depth was negative or above 255.
    InvalidDepth(i64),

    /// Heuristic selector did not match any known evaluation.
    UnknownHeuristic(String),

    /// A move string could not be parsed.
    InvalidNotation(String),

    /// The side to move has no legal placement.
    NoLegalMoves(Color),

    /// A pass was requested while a placement is available.
    PassWithLegalMoves(Color),

    /// Neither side can move.
    GameOver,
}

impl fmt::Display for OthelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OthelloError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the 8x8 board")
            }
            OthelloError::IllegalMove { mv, color } => {
                write!(f, "illegal move {mv} for {color}")
            }
            OthelloError::InvalidDepth(depth) => write!(f, "invalid search depth: {depth}"),
            OthelloError::UnknownHeuristic(name) => write!(f, "unknown heuristic: {name}"),
            OthelloError::InvalidNotation(text) => write!(f, "invalid move notation: {text}"),
            OthelloError::NoLegalMoves(color) => write!(f, "{color} has no legal moves"),
            OthelloError::PassWithLegalMoves(color) => {
                write!(f, "{color} may not pass while a placement is available")
            }
            OthelloError::GameOver => write!(f, "game is over"),
        }
    }
}

impl Error for OthelloError {}
