//! Legal placement generation and flip computation.
//!
//! Both work on bitboards with one shift per compass direction. A shift that
//! would wrap a disc from one edge column to the other is masked off, so a
//! walk that leaves the board simply produces an empty set.

use crate::game_state::board::Board;
use crate::game_state::othello_types::*;

const COL_0: Bitboard = 0x0101_0101_0101_0101;
const COL_7: Bitboard = 0x8080_8080_8080_8080;
const NOT_COL_0: Bitboard = !COL_0;
const NOT_COL_7: Bitboard = !COL_7;

/// The eight compass directions as `(d_row, d_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Move every set bit one step in this direction, dropping bits that leave the board.
    #[inline]
    pub const fn shift(self, bb: Bitboard) -> Bitboard {
        match self {
            Direction::North => bb >> 8,
            Direction::South => bb << 8,
            Direction::East => (bb << 1) & NOT_COL_0,
            Direction::West => (bb >> 1) & NOT_COL_7,
            Direction::NorthEast => (bb >> 7) & NOT_COL_0,
            Direction::NorthWest => (bb >> 9) & NOT_COL_7,
            Direction::SouthEast => (bb << 9) & NOT_COL_0,
            Direction::SouthWest => (bb << 7) & NOT_COL_7,
        }
    }
}

/// Bitboard of every empty cell where `color` may legally place.
pub fn legal_move_mask(board: &Board, color: Color) -> Bitboard {
    let own = board.discs(color);
    let opp = board.discs(color.opposite());
    let empty = board.empty_cells();
    let mut moves = 0u64;

    for dir in ALL_DIRECTIONS {
        // Runs of opponent discs adjacent to one of ours; six steps cover the
        // longest run that fits between two cells on an 8-wide line.
        let mut run = dir.shift(own) & opp;
        for _ in 0..5 {
            run |= dir.shift(run) & opp;
        }
        moves |= dir.shift(run) & empty;
    }

    moves
}

/// Row-major list of the squares set in `mask`.
pub fn moves_from_mask(mut mask: Bitboard) -> Vec<Move> {
    let mut out = Vec::with_capacity(mask.count_ones() as usize);
    while mask != 0 {
        let sq = mask.trailing_zeros() as Square;
        out.push(Move::from_square(sq));
        mask &= mask - 1;
    }
    out
}

/// Opponent discs that a placement at `mv` by `color` would flip.
///
/// Returns 0 for an occupied target or a placement that brackets nothing.
pub fn flips_for_move(board: &Board, mv: Move, color: Color) -> Bitboard {
    let origin = mv.bit();
    if board.occupied() & origin != 0 {
        return 0;
    }

    let own = board.discs(color);
    let opp = board.discs(color.opposite());
    let mut flips = 0u64;

    for dir in ALL_DIRECTIONS {
        let mut ray = 0u64;
        let mut cursor = dir.shift(origin);
        while cursor & opp != 0 {
            ray |= cursor;
            cursor = dir.shift(cursor);
        }
        if cursor & own != 0 {
            flips |= ray;
        }
    }

    flips
}

#[cfg(test)]
mod tests {
    use super::{flips_for_move, legal_move_mask, moves_from_mask, ALL_DIRECTIONS};
    use crate::game_state::board::Board;
    use crate::game_state::othello_types::{Color, Move};

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).expect("test move should be on the board")
    }

    #[test]
    fn shifts_match_direction_deltas_from_the_center() {
        let center = mv(3, 3);
        for dir in ALL_DIRECTIONS {
            let (dr, dc) = dir.delta();
            let expected = mv((3 + dr) as u8, (3 + dc) as u8).bit();
            assert_eq!(dir.shift(center.bit()), expected, "{dir:?}");
        }
    }

    #[test]
    fn shifts_drop_discs_leaving_the_board() {
        for dir in ALL_DIRECTIONS {
            let (dr, dc) = dir.delta();
            for sq in 0..64u8 {
                let from = Move::from_square(sq);
                let r = from.row as i8 + dr;
                let c = from.col as i8 + dc;
                let on_board = (0..8).contains(&r) && (0..8).contains(&c);
                let shifted = dir.shift(from.bit());
                if on_board {
                    assert_eq!(shifted, mv(r as u8, c as u8).bit());
                } else {
                    assert_eq!(shifted, 0, "{dir:?} from {from}");
                }
            }
        }
    }

    #[test]
    fn moves_from_mask_is_row_major() {
        let mask = mv(5, 4).bit() | mv(2, 3).bit() | mv(4, 5).bit() | mv(3, 2).bit();
        assert_eq!(
            moves_from_mask(mask),
            vec![mv(2, 3), mv(3, 2), mv(4, 5), mv(5, 4)]
        );
    }

    #[test]
    fn legal_moves_never_include_occupied_cells() {
        let board = Board::from_rows(&[
            "........",
            "..OOO...",
            "..OXO...",
            "..OOOX..",
            "...XO...",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        for color in [Color::Black, Color::White] {
            assert_eq!(legal_move_mask(&board, color) & board.occupied(), 0);
        }
    }

    #[test]
    fn flips_cover_multiple_directions() {
        // Black at (3,3) brackets White to the west, east and north.
        let board = Board::from_rows(&[
            "........",
            "...X.X..",
            "...O.O..",
            ".XO.OOX.",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        let flips = flips_for_move(&board, mv(3, 3), Color::Black);
        let expected = mv(3, 2).bit() | mv(3, 4).bit() | mv(3, 5).bit() | mv(2, 3).bit();
        assert_eq!(flips, expected);
    }

    #[test]
    fn unterminated_runs_do_not_flip() {
        // The White run reaches the edge without a Black terminator.
        let board = Board::from_rows(&[
            "........",
            "........",
            "........",
            "...XOOOO",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        assert_eq!(legal_move_mask(&board, Color::Black), 0);
    }

    #[test]
    fn runs_broken_by_empty_cells_do_not_flip() {
        let board = Board::from_rows(&[
            "........",
            "........",
            "........",
            "X.OO....",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        assert_eq!(flips_for_move(&board, mv(3, 4), Color::Black), 0);
        assert_eq!(legal_move_mask(&board, Color::Black), 0);
        assert_eq!(legal_move_mask(&board, Color::White), 0);
    }

    #[test]
    fn occupied_target_flips_nothing() {
        let board = Board::new_game();
        assert_eq!(flips_for_move(&board, mv(3, 3), Color::Black), 0);
    }

    #[test]
    fn long_run_across_the_board_is_detected() {
        let board = Board::from_rows(&[
            ".OOOOOOX",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("diagram should parse");

        assert_eq!(legal_move_mask(&board, Color::Black), mv(0, 0).bit());
        assert_eq!(flips_for_move(&board, mv(0, 0), Color::Black).count_ones(), 6);
    }
}
