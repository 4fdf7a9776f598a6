//! Pluggable static evaluation for the alpha-beta search.
//!
//! Each scorer returns a plain integer from the point of view of the color it
//! is asked about. Exactly one heuristic is active per search; they are never
//! weighted or combined.

use std::fmt;
use std::str::FromStr;

use crate::game_state::board::{Board, CORNERS};
use crate::game_state::othello_types::Color;
use crate::move_generation::legal_move_generator::legal_move_mask;
use crate::othello_errors::{OthelloError, OthelloResult};

pub trait BoardScorer: Send + Sync {
    /// Score `board` for `player`. Must be a pure function of its inputs.
    fn score(&self, board: &Board, player: Color) -> i32;
}

/// Own discs minus opponent discs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscDifferenceScorer;

impl BoardScorer for DiscDifferenceScorer {
    fn score(&self, board: &Board, player: Color) -> i32 {
        board.count(player) as i32 - board.count(player.opposite()) as i32
    }
}

/// Corners held by `player`, 0 to 4. Opponent corners are not subtracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerControlScorer;

impl BoardScorer for CornerControlScorer {
    fn score(&self, board: &Board, player: Color) -> i32 {
        (board.discs(player) & CORNERS).count_ones() as i32
    }
}

/// Legal placements currently available to `player`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl BoardScorer for MobilityScorer {
    fn score(&self, board: &Board, player: Color) -> i32 {
        legal_move_mask(board, player).count_ones() as i32
    }
}

/// Heuristic selector carried by a search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    DiscDifference,
    CornerControl,
    Mobility,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::DiscDifference,
        Heuristic::CornerControl,
        Heuristic::Mobility,
    ];

    /// Numeric selector used by menus: 1, 2 or 3.
    pub fn from_selector(selector: i64) -> OthelloResult<Self> {
        match selector {
            1 => Ok(Heuristic::DiscDifference),
            2 => Ok(Heuristic::CornerControl),
            3 => Ok(Heuristic::Mobility),
            other => Err(OthelloError::UnknownHeuristic(other.to_string())),
        }
    }

    pub const fn selector(self) -> u8 {
        match self {
            Heuristic::DiscDifference => 1,
            Heuristic::CornerControl => 2,
            Heuristic::Mobility => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::DiscDifference => "disc-difference",
            Heuristic::CornerControl => "corner-control",
            Heuristic::Mobility => "mobility",
        }
    }
}

impl BoardScorer for Heuristic {
    fn score(&self, board: &Board, player: Color) -> i32 {
        match self {
            Heuristic::DiscDifference => DiscDifferenceScorer.score(board, player),
            Heuristic::CornerControl => CornerControlScorer.score(board, player),
            Heuristic::Mobility => MobilityScorer.score(board, player),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "h1" | "disc-difference" | "disc_difference" | "discs" => {
                Ok(Heuristic::DiscDifference)
            }
            "2" | "h2" | "corner-control" | "corner_control" | "corners" => {
                Ok(Heuristic::CornerControl)
            }
            "3" | "h3" | "mobility" => Ok(Heuristic::Mobility),
            _ => Err(OthelloError::UnknownHeuristic(s.to_owned())),
        }
    }
}

/// Score `board` for `player` with the selected heuristic.
#[inline]
pub fn evaluate(board: &Board, player: Color, heuristic: Heuristic) -> i32 {
    heuristic.score(board, player)
}
