//! An agent to pick the best move in a pawn-game position

use anyhow::Result;

use crate::board::{Board, Color};
use crate::tree::{build_tree, MoveNode};

/// The score of a position the deciding color has won
pub const WIN_SCORE: i32 = 10;
/// The score of a position the deciding color has lost
pub const LOSS_SCORE: i32 = -10;

/// Scores a board from `perspective`'s point of view.
///
/// A decided game scores [`WIN_SCORE`] or [`LOSS_SCORE`]; any other board
/// scores the difference in pawn counts between `perspective` and its
/// opponent.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == perspective {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
    }
    board.pawn_count(perspective) as i32 - board.pawn_count(perspective.opponent()) as i32
}

/// Outcome of a best-move search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The chosen successor board and its minimax value
    Best { board: Board, score: i32 },
    /// The mover has no legal move from the root position
    NoLegalMove,
}

/// An agent that picks the best next board for one color
///
/// # Notes
/// The agent materializes the full tree of positions to the requested
/// depth, then walks it depth-first, taking the maximum child value where
/// the deciding color moves and the minimum where the opponent does.
/// Comparisons are strict, so an equal value never displaces an earlier
/// child: the first move generated wins ties.
pub struct Solver {
    root: MoveNode,
    deciding: Color,
    depth: usize,

    /// The number of nodes visited by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` optimizing for `color`, building the move
    /// tree `depth` plies deep up front.
    pub fn new(board: Board, color: Color, depth: usize) -> Self {
        Self {
            root: build_tree(board, color, depth),
            deciding: color,
            depth,
            node_count: 0,
        }
    }

    /// Picks the best child of the root position.
    ///
    /// Returns [`SearchResult::NoLegalMove`] when the root has no
    /// children, which covers both an unmovable position and a search of
    /// depth 0.
    pub fn solve(&mut self) -> SearchResult {
        if self.root.children.is_empty() {
            return SearchResult::NoLegalMove;
        }
        self.node_count += 1;

        // the root mover is the deciding color, so this is the maximizing
        // rule plus tracking of which child achieved the value
        let mut best_index = 0;
        let mut best_value = 0;
        for (index, child) in self.root.children.iter_mut().enumerate() {
            let value = minimax(child, self.deciding, self.depth - 1, &mut self.node_count);
            if index == 0 || value > best_value {
                best_index = index;
                best_value = value;
            }
        }
        self.root.value = Some(best_value);

        SearchResult::Best {
            board: self.root.children[best_index].board.clone(),
            score: best_value,
        }
    }
}

/// Assigns minimax values to the tree below `node` and returns the value
/// of `node` itself.
///
/// Depth-first post-order: a node at the depth limit or without children
/// takes the static evaluation for `deciding`; other nodes take the
/// maximum of their children's values when their mover is `deciding` and
/// the minimum otherwise, the first child winning ties in both cases.
fn minimax(node: &mut MoveNode, deciding: Color, depth: usize, node_count: &mut usize) -> i32 {
    *node_count += 1;

    if depth == 0 || node.children.is_empty() {
        let value = evaluate(&node.board, deciding);
        node.value = Some(value);
        return value;
    }

    let maximizing = node.mover == deciding;
    let mut best_value = 0;
    for (index, child) in node.children.iter_mut().enumerate() {
        let value = minimax(child, deciding, depth - 1, node_count);
        if index == 0
            || (maximizing && value > best_value)
            || (!maximizing && value < best_value)
        {
            best_value = value;
        }
    }
    node.value = Some(best_value);
    best_value
}

/// Finds the best next board for a character-encoded position.
///
/// `rows` must hold `size` rows of `size` characters drawn from
/// `{'b', 'w', '-'}` and `color` must be `'b'` or `'w'`; anything else
/// fails with a descriptive error before any search runs.
pub fn solve_position<S: AsRef<str>>(
    rows: &[S],
    size: usize,
    color: char,
    depth: usize,
) -> Result<SearchResult> {
    let board = Board::from_rows(rows, size)?;
    let color = Color::from_char(color)?;
    Ok(Solver::new(board, color, depth).solve())
}
