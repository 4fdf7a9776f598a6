//! Perft (performance test) enumeration for move-generation validation.
//!
//! A forced pass counts as one ply and a finished game counts as a leaf, so
//! totals line up with the published Othello perft tables.

use crate::game_state::board::Board;
use crate::game_state::othello_types::Color;
use crate::move_generation::legal_move_apply::{apply_move_in_place, unmake_move};
use crate::othello_errors::OthelloResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub passes: u64,
    pub game_ends: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.passes += rhs.passes;
        self.game_ends += rhs.game_ends;
    }
}

pub fn perft(board: &Board, color: Color, depth: u8) -> OthelloResult<PerftCounts> {
    let mut scratch = *board;
    perft_recurse(&mut scratch, color, depth)
}

fn perft_recurse(board: &mut Board, color: Color, depth: u8) -> OthelloResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = board.valid_moves(color);
    if moves.is_empty() {
        if !board.has_valid_move(color.opposite()) {
            return Ok(PerftCounts {
                nodes: 1,
                game_ends: 1,
                ..PerftCounts::default()
            });
        }
        let mut counts = perft_recurse(board, color.opposite(), depth - 1)?;
        counts.passes += 1;
        return Ok(counts);
    }

    let mut total = PerftCounts::default();
    for mv in moves {
        let undo = apply_move_in_place(board, mv, color)?;
        let child = perft_recurse(board, color.opposite(), depth - 1);
        unmake_move(board, &undo);
        total.merge(child?);
    }

    Ok(total)
}

/// Per-root-move leaf counts, useful when bisecting a move-generation bug.
pub fn perft_divide(board: &Board, color: Color, depth: u8) -> OthelloResult<Vec<(String, u64)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    let mut scratch = *board;
    for mv in scratch.valid_moves(color) {
        let undo = apply_move_in_place(&mut scratch, mv, color)?;
        let child = perft_recurse(&mut scratch, color.opposite(), depth - 1);
        unmake_move(&mut scratch, &undo);
        out.push((mv.to_string(), child?.nodes));
    }

    Ok(out)
}
