//! Core value types shared by the board, move generation and search.
//!
//! Squares are indexed row-major: `square = row * 8 + col`, so bit 0 of a
//! bitboard is the top-left cell `(0, 0)` and bit 63 is `(7, 7)`.

use std::fmt;

use crate::othello_errors::{OthelloError, OthelloResult};

/// Board square index (`0..=63`).
pub type Square = u8;

/// One bit per square.
pub type Bitboard = u64;

pub const BOARD_SIZE: u8 = 8;

/// Side to move. Black is displayed as `X` and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A placement target, 0-indexed `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> OthelloResult<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(OthelloError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Caller guarantees `square < 64`.
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Self {
            row: square / BOARD_SIZE,
            col: square % BOARD_SIZE,
        }
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.row * BOARD_SIZE + self.col
    }

    #[inline]
    pub const fn bit(self) -> Bitboard {
        1u64 << self.square()
    }
}

/// Displays as 1-indexed row followed by column letter, e.g. `(2, 3)` is `3d`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, char::from(b'a' + self.col))
    }
}
