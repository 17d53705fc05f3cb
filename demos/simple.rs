use robot_navigation::solver::astar::AstarSolver;
use robot_navigation::{Cell, Grid, SearchStrategy, Wall};

// In this example a path is found on a 3x3 grid with shape
// S..
// .#.
// ..G
// S marks the start
// G marks the goal
// # marks a wall
fn main() {
    let grid = Grid::new(3, 3, Cell::new(0, 0), [Cell::new(2, 2)], &[Wall::new(1, 1, 1, 1)])
        .unwrap();
    println!("{}", grid);
    let outcome = AstarSolver::default().solve(&grid);
    if outcome.found() {
        println!("A path has been found:");
        for p in &outcome.path {
            println!("{}", p);
        }
        println!("\n{}", grid.render(&outcome.moves, &outcome.path));
    }
}
