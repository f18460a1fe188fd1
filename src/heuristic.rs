use crate::board::Board;
use std::fmt;

/// Estimate of the slides left between a board and the goal.
///
/// Every variant is admissible, so the solver's move count stays optimal
/// whichever one is picked. They differ only in how many nodes get expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    Hamming,
    #[default]
    Manhattan,
    /// Manhattan plus two slides for every tile caught in a linear conflict.
    LinearConflict,
}

impl Heuristic {
    pub fn evaluate(&self, board: &Board) -> usize {
        match self {
            Heuristic::Hamming => board.hamming(),
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::LinearConflict => board.manhattan() + 2 * board.linear_conflicts(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Heuristic::Hamming => "hamming",
            Heuristic::Manhattan => "manhattan",
            Heuristic::LinearConflict => "linear-conflict",
        };
        write!(f, "{}", s)
    }
}
