use crate::game_state::othello_types::*;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub color: Color,
    /// Opponent discs converted to `color` by this placement.
    pub flipped: Bitboard,
}
