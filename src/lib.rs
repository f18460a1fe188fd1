//! Sliding-tile puzzle boards and an A* solver.
//!
//! [`Solver`] searches the given board and its [`Board::twin`] side by side.
//! Exactly one of the two can reach the goal, so whichever search gets there
//! first also settles whether the original board is solvable.
mod board;
mod frontier;
mod heuristic;
mod node;
mod solver;

pub use crate::board::{Board, BoardError, Move, Neighbors};
pub use crate::frontier::Frontier;
pub use crate::heuristic::Heuristic;
pub use crate::node::SearchNode;
pub use crate::solver::{SearchStats, Solver};
