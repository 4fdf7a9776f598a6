//! Human-readable move coordinates.
//!
//! Moves display as a 1-indexed row digit followed by a column letter, so
//! `(2, 3)` is `3d`. Parsing also accepts the letter first (`d3`) and a
//! separating space (`3 d`).

use crate::game_state::game_state::Ply;
use crate::game_state::othello_types::{Color, Move};
use crate::othello_errors::{OthelloError, OthelloResult};

pub const PASS_TOKEN: &str = "pass";

/// Parse `3d`, `3 d`, `d3` or `D3` into a move.
pub fn parse_move(text: &str) -> OthelloResult<Move> {
    let compact: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let (row_char, col_char) = match compact.as_slice() {
        [r @ '1'..='8', c @ 'a'..='h'] | [c @ 'a'..='h', r @ '1'..='8'] => (*r, *c),
        _ => return Err(OthelloError::InvalidNotation(text.to_owned())),
    };

    let row = row_char as u8 - b'1';
    let col = col_char as u8 - b'a';
    Move::new(row, col)
}

#[inline]
pub fn move_to_notation(mv: Move) -> String {
    mv.to_string()
}

/// `3d` for a placement, `pass` for a forfeited turn.
pub fn ply_to_notation(ply: Ply) -> String {
    match ply {
        Ply::Place { mv, .. } => move_to_notation(mv),
        Ply::Pass(_) => PASS_TOKEN.to_owned(),
    }
}

/// Move-log line such as `X: 3d`.
pub fn move_log_entry(color: Color, mv: Move) -> String {
    format!("{color}: {mv}")
}

/// Move-log lines for a whole history; passes are logged as `X: pass`.
pub fn move_log(history: &[Ply]) -> Vec<String> {
    history
        .iter()
        .map(|ply| format!("{}: {}", ply.color(), ply_to_notation(*ply)))
        .collect()
}
