//! Depth-limited minimax with alpha-beta pruning.
//!
//! The tree is walked on one scratch board with make/unmake, so sibling
//! branches never observe each other's placements. Maximizing and minimizing
//! plies alternate with the mover; at every node all moves tied on the
//! extremal score are collected and handed to a `TieBreak`.

use crate::game_state::board::Board;
use crate::game_state::othello_types::{Color, Move};
use crate::move_generation::legal_move_apply::{apply_move_in_place, unmake_move};
use crate::othello_errors::{OthelloError, OthelloResult};
use crate::search::board_scoring::{BoardScorer, Heuristic};
use crate::search::tie_break::TieBreak;

/// Stand-ins for -∞ / +∞. No heuristic comes near either bound.
pub const NEG_INFINITY: i32 = i32::MIN;
pub const POS_INFINITY: i32 = i32::MAX;

/// Whose point of view static evaluation takes at a cut-off node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalPerspective {
    /// The color that started the search, at every depth.
    #[default]
    RootPlayer,
    /// The color to move at the cut-off node, which alternates every ply.
    NodeMover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub heuristic: Heuristic,
    pub perspective: EvalPerspective,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            heuristic: Heuristic::DiscDifference,
            perspective: EvalPerspective::RootPlayer,
        }
    }
}

impl SearchConfig {
    /// Validate a raw depth; negative or oversized depths are rejected here
    /// rather than during search.
    pub fn new(depth: i64, heuristic: Heuristic) -> OthelloResult<Self> {
        let depth = u8::try_from(depth).map_err(|_| OthelloError::InvalidDepth(depth))?;
        Ok(Self {
            depth,
            heuristic,
            perspective: EvalPerspective::default(),
        })
    }

    /// Parse depth and heuristic from user-facing strings.
    pub fn parse(depth: &str, heuristic: &str) -> OthelloResult<Self> {
        let raw: i64 = depth
            .trim()
            .parse()
            .map_err(|_| OthelloError::InvalidNotation(depth.to_owned()))?;
        Self::new(raw, heuristic.parse()?)
    }

    pub fn with_perspective(mut self, perspective: EvalPerspective) -> Self {
        self.perspective = perspective;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Root moves whose exact minimax value equals `best_score`, counted
    /// before the tie-break.
    pub candidates: usize,
    pub nodes: u64,
}

/// Search from the full window with `player` maximizing.
pub fn search<S: BoardScorer, T: TieBreak>(
    board: &Board,
    depth: u8,
    player: Color,
    scorer: &S,
    perspective: EvalPerspective,
    tie_break: &mut T,
) -> OthelloResult<SearchResult> {
    search_window(
        board,
        depth,
        NEG_INFINITY,
        POS_INFINITY,
        true,
        player,
        scorer,
        perspective,
        tie_break,
    )
}

/// Search with a configured heuristic, depth and perspective.
pub fn search_with_config<T: TieBreak>(
    board: &Board,
    player: Color,
    config: &SearchConfig,
    tie_break: &mut T,
) -> OthelloResult<SearchResult> {
    search(
        board,
        config.depth,
        player,
        &config.heuristic,
        config.perspective,
        tie_break,
    )
}

/// Explicit-window entry point. `player` is the color to move at the root
/// and, under `EvalPerspective::RootPlayer`, the color every leaf is scored for.
#[allow(clippy::too_many_arguments)]
pub fn search_window<S: BoardScorer, T: TieBreak>(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    player: Color,
    scorer: &S,
    perspective: EvalPerspective,
    tie_break: &mut T,
) -> OthelloResult<SearchResult> {
    let mut walker = AlphaBeta {
        scorer,
        perspective,
        root: player,
        tie_break,
        nodes: 0,
    };
    let mut scratch = *board;
    let node = walker.node(&mut scratch, depth, alpha, beta, maximizing, player)?;

    Ok(SearchResult {
        best_move: node.best_move,
        best_score: node.score,
        candidates: node.candidates,
        nodes: walker.nodes,
    })
}

struct NodeResult {
    score: i32,
    best_move: Option<Move>,
    candidates: usize,
}

struct AlphaBeta<'a, S, T> {
    scorer: &'a S,
    perspective: EvalPerspective,
    root: Color,
    tie_break: &'a mut T,
    nodes: u64,
}

impl<S: BoardScorer, T: TieBreak> AlphaBeta<'_, S, T> {
    fn leaf(&self, board: &Board, mover: Color) -> NodeResult {
        let side = match self.perspective {
            EvalPerspective::RootPlayer => self.root,
            EvalPerspective::NodeMover => mover,
        };
        NodeResult {
            score: self.scorer.score(board, side),
            best_move: None,
            candidates: 0,
        }
    }

    fn node(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        mover: Color,
    ) -> OthelloResult<NodeResult> {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return Ok(self.leaf(board, mover));
        }

        let moves = board.valid_moves(mover);
        if moves.is_empty() {
            return Ok(self.leaf(board, mover));
        }

        let mut best = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut best_moves = Vec::with_capacity(moves.len());

        for mv in moves {
            // Widen by one on the side this node tightens, so a child equal to
            // `best` is an exact value and not a fail-low bound.
            let (child_alpha, child_beta) = if maximizing {
                (alpha.saturating_sub(1), beta)
            } else {
                (alpha, beta.saturating_add(1))
            };

            let undo = apply_move_in_place(board, mv, mover)?;
            let child = self.node(
                board,
                depth - 1,
                child_alpha,
                child_beta,
                !maximizing,
                mover.opposite(),
            );
            unmake_move(board, &undo);
            let score = child?.score;

            let improves = if maximizing { score > best } else { score < best };
            if improves {
                best = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best {
                best_moves.push(mv);
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(NodeResult {
            score: best,
            best_move: self.tie_break.pick(&best_moves),
            candidates: best_moves.len(),
        })
    }
}
