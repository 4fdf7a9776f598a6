//! Bitboard representation of the 8×8 Othello grid.
//!
//! `Board` stores one occupancy bitboard per color and is `Copy`, so taking a
//! snapshot is a 16-byte copy. All rule logic (legal moves, flips) lives in
//! `move_generation`; the methods here are the public query/mutation surface
//! that delegates to it.

use crate::game_state::othello_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_generator::{legal_move_mask, moves_from_mask};
use crate::othello_errors::{OthelloError, OthelloResult};

pub const CORNERS: Bitboard = (1u64 << 0) | (1u64 << 7) | (1u64 << 56) | (1u64 << 63);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // [color]
    discs: [Bitboard; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Board with no discs. Used by tests and position setup.
    #[inline]
    pub const fn empty() -> Self {
        Self { discs: [0; 2] }
    }

    /// Canonical starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub const fn new_game() -> Self {
        let white = (1u64 << (3 * 8 + 3)) | (1u64 << (4 * 8 + 4));
        let black = (1u64 << (3 * 8 + 4)) | (1u64 << (4 * 8 + 3));
        Self {
            discs: [black, white],
        }
    }

    /// Build a board from eight row strings of `X`, `O` and `.`.
    ///
    /// Whitespace inside a row is ignored so diagrams can be spaced out.
    pub fn from_rows(rows: &[&str]) -> OthelloResult<Self> {
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(OthelloError::InvalidNotation(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != usize::from(BOARD_SIZE) {
                return Err(OthelloError::InvalidNotation((*line).to_owned()));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let mv = Move::from_square((row * 8 + col) as Square);
                match ch {
                    'X' | 'x' | 'B' | 'b' => board.discs[Color::Black.index()] |= mv.bit(),
                    'O' | 'o' | 'W' | 'w' => board.discs[Color::White.index()] |= mv.bit(),
                    '.' | '-' | '_' => {}
                    _ => return Err(OthelloError::InvalidNotation((*line).to_owned())),
                }
            }
        }

        Ok(board)
    }

    #[inline]
    pub const fn discs(&self, color: Color) -> Bitboard {
        self.discs[color.index()]
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.discs[0] | self.discs[1]
    }

    #[inline]
    pub const fn empty_cells(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub const fn count(&self, color: Color) -> u32 {
        self.discs[color.index()].count_ones()
    }

    /// `(black_count, white_count)`.
    #[inline]
    pub const fn score(&self) -> (u32, u32) {
        (self.count(Color::Black), self.count(Color::White))
    }

    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        let bit = mv.bit();
        if self.discs[Color::Black.index()] & bit != 0 {
            Cell::Black
        } else if self.discs[Color::White.index()] & bit != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Checked cell lookup for callers holding raw coordinates.
    pub fn cell_at(&self, row: u8, col: u8) -> OthelloResult<Cell> {
        Ok(self.cell(Move::new(row, col)?))
    }

    /// Legal placements for `color` in row-major order.
    pub fn valid_moves(&self, color: Color) -> Vec<Move> {
        moves_from_mask(legal_move_mask(self, color))
    }

    #[inline]
    pub fn has_valid_move(&self, color: Color) -> bool {
        legal_move_mask(self, color) != 0
    }

    /// Place a disc for `color` and flip every bracketed run.
    ///
    /// Rejects occupied targets and placements that flip nothing; on error
    /// the board is untouched.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> OthelloResult<UndoState> {
        apply_move_in_place(self, mv, color)
    }

    /// Neither side has a legal placement.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.has_valid_move(Color::Black) && !self.has_valid_move(Color::White)
    }

    /// Raw bitboard write, used only by make/unmake.
    #[inline]
    pub(crate) fn set_discs(&mut self, color: Color, discs: Bitboard) {
        self.discs[color.index()] = discs;
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::othello_types::{Cell, Color, Move};

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).expect("test move should be on the board")
    }

    #[test]
    fn initial_board_has_four_center_discs() {
        let board = Board::new_game();
        assert_eq!(board.cell(mv(3, 3)), Cell::White);
        assert_eq!(board.cell(mv(3, 4)), Cell::Black);
        assert_eq!(board.cell(mv(4, 3)), Cell::Black);
        assert_eq!(board.cell(mv(4, 4)), Cell::White);
        assert_eq!(board.score(), (2, 2));
        assert_eq!(board.empty_cells().count_ones(), 60);
    }

    #[test]
    fn initial_black_moves_are_the_four_standard_openings() {
        let board = Board::new_game();
        assert_eq!(
            board.valid_moves(Color::Black),
            vec![mv(2, 3), mv(3, 2), mv(4, 5), mv(5, 4)]
        );
    }

    #[test]
    fn initial_white_moves_mirror_black() {
        let board = Board::new_game();
        assert_eq!(
            board.valid_moves(Color::White),
            vec![mv(2, 4), mv(3, 5), mv(4, 2), mv(5, 3)]
        );
    }

    #[test]
    fn black_opening_flips_center_disc() {
        let mut board = Board::new_game();
        let undo = board
            .apply_move(mv(2, 3), Color::Black)
            .expect("opening move should be legal");

        assert_eq!(board.cell(mv(3, 3)), Cell::Black);
        assert_eq!(board.score(), (4, 1));
        assert_eq!(undo.flipped.count_ones(), 1);
    }

    #[test]
    fn apply_move_rejects_occupied_and_non_flipping_cells() {
        let mut board = Board::new_game();
        let before = board;

        assert!(board.apply_move(mv(3, 3), Color::Black).is_err());
        assert!(board.apply_move(mv(0, 0), Color::Black).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn move_on_copy_leaves_original_untouched() {
        let original = Board::new_game();
        let mut copy = original;
        copy.apply_move(mv(5, 4), Color::Black)
            .expect("opening move should be legal");

        assert_ne!(copy, original);
        assert_eq!(original, Board::new_game());
    }

    #[test]
    fn from_rows_parses_diagram() {
        let board = Board::from_rows(&[
            "X . . . . . . O",
            "........",
            "........",
            "...OX...",
            "...XO...",
            "........",
            "........",
            "O......X",
        ])
        .expect("diagram should parse");

        assert_eq!(board.score(), (4, 4));
        assert_eq!(board.cell(mv(0, 7)), Cell::White);
        assert_eq!(board.cell(mv(7, 7)), Cell::Black);
    }

    #[test]
    fn from_rows_rejects_bad_diagrams() {
        assert!(Board::from_rows(&["........"; 7]).is_err());
        let mut rows = ["........"; 8];
        rows[2] = "...Z....";
        assert!(Board::from_rows(&rows).is_err());
    }

    #[test]
    fn full_board_is_terminal() {
        let board = Board::from_rows(&["XXXXXXXX"; 8]).expect("diagram should parse");
        assert!(board.is_terminal());
        assert!(board.valid_moves(Color::Black).is_empty());
        assert!(board.valid_moves(Color::White).is_empty());
    }

    #[test]
    fn one_side_stuck_is_not_terminal() {
        let board = Board::from_rows(&[
            "......XO",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        assert!(!board.has_valid_move(Color::Black));
        assert_eq!(board.valid_moves(Color::White), vec![mv(0, 5)]);
        assert!(!board.is_terminal());
    }

    #[test]
    fn terminal_matches_both_move_sets_empty_through_a_game() {
        let mut board = Board::new_game();
        let mut color = Color::Black;
        loop {
            let black_stuck = board.valid_moves(Color::Black).is_empty();
            let white_stuck = board.valid_moves(Color::White).is_empty();
            assert_eq!(board.is_terminal(), black_stuck && white_stuck);
            if board.is_terminal() {
                break;
            }
            if let Some(&next) = board.valid_moves(color).first() {
                board.apply_move(next, color).expect("generated move");
            }
            color = color.opposite();
        }
    }

    #[test]
    fn cell_at_checks_bounds() {
        let board = Board::new_game();
        assert_eq!(board.cell_at(3, 4).expect("in range"), Cell::Black);
        assert!(board.cell_at(8, 0).is_err());
    }
}
