//! Bounded-depth move tree construction

use crate::board::{Board, Color};

/// A node in the move tree.
///
/// `mover` is the color whose turn it is to move from `board`, so every
/// child holds a board produced by `mover` and carries the opposite
/// color. Each node exclusively owns its children. `value` stays `None`
/// until the minimax pass visits the node, and is never revised after.
pub struct MoveNode {
    pub board: Board,
    pub mover: Color,
    pub children: Vec<MoveNode>,
    pub value: Option<i32>,
}

impl MoveNode {
    pub fn new(board: Board, mover: Color) -> Self {
        Self {
            board,
            mover,
            children: Vec::new(),
            value: None,
        }
    }
}

/// Builds the tree of positions reachable from `board` within `depth`
/// plies, movers alternating level by level.
///
/// The depth cutoff is checked before move generation, so a depth of 0
/// yields a childless node even when legal moves exist.
pub fn build_tree(board: Board, mover: Color, depth: usize) -> MoveNode {
    let mut root = MoveNode::new(board, mover);
    populate(&mut root, depth);
    root
}

fn populate(node: &mut MoveNode, depth: usize) {
    if depth == 0 {
        return;
    }

    let next_mover = node.mover.opponent();
    for board in node.board.generate_moves(node.mover) {
        node.children.push(MoveNode::new(board, next_mover));
    }
    for child in &mut node.children {
        populate(child, depth - 1);
    }
}
