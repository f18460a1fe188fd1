use crate::board::Board;

/// One entry of a search track.
///
/// `parent` indexes the track's arena of expanded nodes and is `None` only
/// for the root. Links always point at earlier arena slots, so the chain
/// back to the root has no cycles.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub moves: usize,
    pub parent: Option<usize>,
    pub heuristic: usize,
}

impl SearchNode {
    pub fn root(board: Board, heuristic: usize) -> Self {
        Self {
            board,
            moves: 0,
            parent: None,
            heuristic,
        }
    }

    pub fn child(board: Board, heuristic: usize, parent: usize, parent_moves: usize) -> Self {
        Self {
            board,
            moves: parent_moves + 1,
            parent: Some(parent),
            heuristic,
        }
    }

    pub fn priority(&self) -> usize {
        self.moves + self.heuristic
    }
}
