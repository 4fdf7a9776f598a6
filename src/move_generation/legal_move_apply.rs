//! Move application with make/unmake support.
//!
//! `apply_move_in_place` validates and mutates a board, returning the undo
//! record. `unmake_move` reverses exactly that record, which lets the search
//! walk the tree on a single owned board instead of copying per node.

use crate::game_state::board::Board;
use crate::game_state::othello_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::flips_for_move;
use crate::othello_errors::{OthelloError, OthelloResult};

pub fn apply_move_in_place(board: &mut Board, mv: Move, color: Color) -> OthelloResult<UndoState> {
    let flipped = flips_for_move(board, mv, color);
    if flipped == 0 {
        return Err(OthelloError::IllegalMove { mv, color });
    }

    let opp = color.opposite();
    board.set_discs(color, board.discs(color) | flipped | mv.bit());
    board.set_discs(opp, board.discs(opp) & !flipped);

    Ok(UndoState { mv, color, flipped })
}

/// Revert a placement produced by `apply_move_in_place` on the same board.
pub fn unmake_move(board: &mut Board, undo: &UndoState) {
    let color = undo.color;
    let opp = color.opposite();
    board.set_discs(color, board.discs(color) & !(undo.flipped | undo.mv.bit()));
    board.set_discs(opp, board.discs(opp) | undo.flipped);
}

/// Copy-on-write variant: returns the successor board and leaves `board` alone.
pub fn apply_move(board: &Board, mv: Move, color: Color) -> OthelloResult<Board> {
    let mut next = *board;
    apply_move_in_place(&mut next, mv, color)?;
    Ok(next)
}
