use robot_navigation::driver::navigate;
use robot_navigation::observer::NoopObserver;
use robot_navigation::{Algorithm, Cell, Grid, Heuristic, Wall};

// In this example a path is found to one of two goals on a 3x3 grid with shape
// S.G
// .#.
// ..G
// Every search except DFS moves to the closest goal, which is the top one, even though the
// bottom one is listed first. DFS heads down first and ends at the bottom goal.
fn main() {
    let grid = Grid::new(
        3,
        3,
        Cell::new(0, 0),
        [Cell::new(2, 2), Cell::new(2, 0)],
        &[Wall::new(1, 1, 1, 1)],
    )
    .unwrap();
    println!("{}", grid);
    for algorithm in Algorithm::ALL {
        let report = navigate(&grid, algorithm, Heuristic::Manhattan, &mut NoopObserver);
        println!("{}", report.format("multiple_goals", &algorithm.to_string()));
    }
}
