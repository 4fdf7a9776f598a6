//! Terminal-oriented board renderer.
//!
//! Produces the same grid the text driver prints: column letters across the
//! top, 1-indexed rows down the side, `X`/`O`/`.` cells.

use crate::game_state::board::Board;
use crate::game_state::othello_types::{Color, Move, Square};
use crate::move_generation::legal_move_generator::legal_move_mask;

pub fn render_board(board: &Board) -> String {
    render_internal(board, 0)
}

/// Like `render_board`, with `*` on every cell where `color` may play.
pub fn render_board_with_hints(board: &Board, color: Color) -> String {
    render_internal(board, legal_move_mask(board, color))
}

fn render_internal(board: &Board, hints: u64) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(char::from(b'1' + row));
        for col in 0..8u8 {
            let mv = Move::from_square((row * 8 + col) as Square);
            out.push(' ');
            if hints & mv.bit() != 0 {
                out.push('*');
            } else {
                out.push(board.cell(mv).symbol());
            }
        }
        out.push('\n');
    }

    let (black, white) = board.score();
    out.push_str(&format!("X: {black}  O: {white}"));
    out
}
