use crate::{
    board::{Board, Move},
    frontier::Frontier,
    heuristic::Heuristic,
    node::SearchNode,
};

type NodeFrontier = Frontier<SearchNode, fn(&SearchNode) -> usize>;

/// Counters gathered while the two tracks race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Lockstep rounds run, the winning one included.
    pub rounds: usize,
    /// Nodes popped from the frontier that started at the caller's board.
    pub main_explored: usize,
    /// Nodes popped from the frontier that started at its twin.
    pub twin_explored: usize,
}

/// Terminal states of the race. The race is running until one is reached.
enum SearchState {
    /// Arena index of the goal node on the main track.
    SolvedMain(usize),
    SolvedTwin,
}

/// One A* search: the open frontier plus an arena of every node already popped.
struct Track {
    frontier: NodeFrontier,
    explored: Vec<SearchNode>,
    heuristic: Heuristic,
}

impl Track {
    fn new(board: Board, heuristic: Heuristic) -> Self {
        let mut frontier: NodeFrontier = Frontier::new(SearchNode::priority);
        let estimate = heuristic.evaluate(&board);
        frontier.push(SearchNode::root(board, estimate));
        Self {
            frontier,
            explored: Vec::new(),
            heuristic,
        }
    }

    /// Moves the cheapest open node into the arena and returns its index.
    fn pop(&mut self) -> Option<usize> {
        let node = self.frontier.pop()?;
        self.explored.push(node);
        Some(self.explored.len() - 1)
    }

    fn is_goal(&self, index: usize) -> bool {
        self.explored[index].board.is_goal()
    }

    /// Pushes every neighbor of `index` except the board it was reached from.
    fn expand(&mut self, index: usize) {
        let node = &self.explored[index];
        let previous = node.parent.map(|parent| &self.explored[parent].board);

        for next in node.board.neighbors() {
            if previous == Some(&next) {
                continue;
            }
            let estimate = self.heuristic.evaluate(&next);
            self.frontier
                .push(SearchNode::child(next, estimate, index, node.moves));
        }
    }

    /// Boards from the root to `index`, following parent links.
    fn path(&self, mut index: usize) -> Vec<Board> {
        let mut path = vec![self.explored[index].board.clone()];
        while let Some(parent) = self.explored[index].parent {
            path.push(self.explored[parent].board.clone());
            index = parent;
        }
        path.reverse();
        path
    }
}

/// A* solver that races the caller's board against its twin.
///
/// Exactly one of a board and its twin can reach the goal, so advancing both
/// searches one node per round always ends with a verdict: the main track
/// reaching the goal means the board is solvable, the twin track reaching it
/// means it is not.
#[derive(Debug, Clone)]
pub struct Solver {
    initial: Board,
    heuristic: Heuristic,
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` using the Manhattan heuristic.
    pub fn new(initial: Board) -> Self {
        Self::with_heuristic(initial, Heuristic::default())
    }

    pub fn with_heuristic(initial: Board, heuristic: Heuristic) -> Self {
        let mut main = Track::new(initial.clone(), heuristic);
        let mut twin = Track::new(initial.twin(), heuristic);
        let mut rounds = 0;

        let state = loop {
            rounds += 1;
            let main_index = main.pop();
            let twin_index = twin.pop();

            if let Some(index) = main_index.filter(|&index| main.is_goal(index)) {
                break SearchState::SolvedMain(index);
            }
            if twin_index.is_some_and(|index| twin.is_goal(index)) {
                break SearchState::SolvedTwin;
            }

            if main_index.is_none() && twin_index.is_none() {
                unreachable!("both frontiers ran dry without reaching the goal");
            }
            if let Some(index) = main_index {
                main.expand(index);
            }
            if let Some(index) = twin_index {
                twin.expand(index);
            }
        };

        let solution = match state {
            SearchState::SolvedMain(index) => Some(main.path(index)),
            SearchState::SolvedTwin => None,
        };

        Self {
            initial,
            heuristic,
            solution,
            stats: SearchStats {
                rounds,
                main_explored: main.explored.len(),
                twin_explored: twin.explored.len(),
            },
        }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Fewest slides that solve the initial board, or `None` if it is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, both included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// The slides between consecutive boards of [`Solver::solution`].
    pub fn solution_moves(&self) -> Option<Vec<Move>> {
        self.solution.as_ref().map(|path| {
            path.windows(2)
                .filter_map(|pair| pair[0].move_to(&pair[1]))
                .collect()
        })
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
