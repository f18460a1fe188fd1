use anyhow::{Context, Result};
use rand::thread_rng;
use slider_puzzle::{Board, Heuristic, Solver};

const SIZE: usize = 3;

fn main() -> Result<()> {
    let goal = Board::goal(SIZE).context("Failed to build goal board")?;
    println!("Goal Puzzle:\n{}", goal);

    let initial = Board::shuffled(SIZE, &mut thread_rng()).context("Failed to shuffle board")?;
    println!("Shuffled Puzzle:\n{}", initial);

    let solver = Solver::with_heuristic(initial, Heuristic::LinearConflict);
    let stats = solver.stats();
    println!(
        "Searched {} rounds with {} heuristic ({} boards explored, {} on the twin)",
        stats.rounds,
        solver.heuristic(),
        stats.main_explored,
        stats.twin_explored
    );

    let (Some(moves), Some(boards), Some(steps)) =
        (solver.moves(), solver.solution(), solver.solution_moves())
    else {
        println!("No solution possible");
        return Ok(());
    };

    println!("Minimum number of moves = {}", moves);
    for (step, board) in steps.iter().zip(boards.iter().skip(1)) {
        println!("{}\n{}", step, board);
    }

    Ok(())
}
