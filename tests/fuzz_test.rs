/// Fuzzes the search strategies by checking on many random grids that a path is found exactly
/// when a goal shares a connected component with the start, that paths are walkable and that
/// the optimal strategies agree on path length. All heuristics are tested.
use robot_navigation::driver::is_walkable;
use robot_navigation::solver::{astar::AstarSolver, bfs::BfsSolver, jps::JpsSolver};
use robot_navigation::{Algorithm, Cell, Grid, Heuristic, SearchStrategy, Wall};
use rand::prelude::*;

const HEURISTICS: [Heuristic; 4] = [
    Heuristic::Manhattan,
    Heuristic::Euclidean,
    Heuristic::Chebyshev,
    Heuristic::Octile,
];

/// A `n` by `n` grid with every cell except the start and goals walled off with probability
/// `density`. Start in the top-left corner, goal in the bottom-right one, plus an optional
/// second goal somewhere else.
fn random_grid(n: i32, density: f64, rng: &mut StdRng, extra_goal: bool) -> Grid {
    let start = Cell::new(0, 0);
    let mut goals = vec![Cell::new(n - 1, n - 1)];
    if extra_goal {
        let goal = Cell::new(rng.gen_range(1..n), rng.gen_range(0..n));
        goals.push(goal);
    }
    let mut walls = Vec::new();
    for x in 0..n {
        for y in 0..n {
            let cell = Cell::new(x, y);
            if cell != start && !goals.contains(&cell) && rng.gen_bool(density) {
                walls.push(Wall::new(x, y, 1, 1));
            }
        }
    }
    Grid::new(n, n, start, goals, &walls).unwrap()
}

fn random_grids(count: usize, n: i32, seed: u64) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| random_grid(n, 0.35, &mut rng, i % 2 == 1))
        .collect()
}

fn visualize_grid(grid: &Grid, path: &[Cell]) {
    print!("{}", grid.render(&[], path));
}

#[test]
fn fuzz() {
    for grid in random_grids(1000, 8, 0) {
        let solvable = grid.solvable();
        for algorithm in Algorithm::ALL {
            let outcome = algorithm.strategy(Heuristic::Manhattan).solve(&grid);
            // Show the grid if a path is not found
            if outcome.found() != solvable {
                println!("{algorithm}");
                visualize_grid(&grid, &outcome.path);
            }
            assert_eq!(outcome.found(), solvable);
            if outcome.found() {
                if !is_walkable(&grid, &outcome.path) {
                    println!("{algorithm}");
                    visualize_grid(&grid, &outcome.path);
                }
                assert!(is_walkable(&grid, &outcome.path));
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    for grid in random_grids(1000, 10, 1) {
        let shortest = BfsSolver.solve(&grid);
        if !shortest.found() {
            continue;
        }
        for heuristic in HEURISTICS {
            let astar = AstarSolver::new(heuristic).solve(&grid);
            assert_eq!(astar.path.len(), shortest.path.len(), "A* {heuristic}");
            let jps = JpsSolver::new(heuristic).solve(&grid);
            assert_eq!(jps.path.len(), shortest.path.len(), "JPS {heuristic}");
            // Every jump point is expanded at most once.
            assert!(jps.node_count() <= grid.component_size(&grid.start()));
        }
        let iddfs = Algorithm::Iddfs.strategy(Heuristic::Manhattan).solve(&grid);
        assert!(iddfs.path.len() >= shortest.path.len());
    }
}

/// Without a reachable goal, the strategies that expand every cell at most once expand the
/// whole component of the start.
#[test]
fn fuzz_exhaustion() {
    let exhaustive = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Gbfs,
        Algorithm::BestFirst,
        Algorithm::Astar,
    ];
    let mut checked = 0;
    for grid in random_grids(1000, 8, 2) {
        if grid.solvable() {
            continue;
        }
        checked += 1;
        let component = grid.component_size(&grid.start());
        for algorithm in exhaustive {
            let outcome = algorithm.strategy(Heuristic::Manhattan).solve(&grid);
            assert!(!outcome.found());
            assert_eq!(outcome.node_count(), component, "{algorithm}");
            assert!(outcome.moves.iter().all(|c| grid.reachable(&grid.start(), c)));
        }
    }
    assert!(checked > 0);
}

#[test]
fn fuzz_determinism() {
    for grid in random_grids(200, 8, 3) {
        for algorithm in Algorithm::ALL {
            let strategy = algorithm.strategy(Heuristic::Octile);
            assert_eq!(strategy.solve(&grid), strategy.solve(&grid), "{algorithm}");
        }
    }
}

/// Watching a search must not change it.
#[test]
fn fuzz_observer_independence() {
    for grid in random_grids(200, 8, 4) {
        for algorithm in Algorithm::ALL {
            let strategy = algorithm.strategy(Heuristic::Manhattan);
            let mut seen = Vec::new();
            let watched = strategy.run(&grid, &mut |moves: &[Cell]| seen.push(moves.len()));
            assert_eq!(watched, strategy.solve(&grid), "{algorithm}");
            if algorithm != Algorithm::BidirectionalAstar {
                assert_eq!(seen, (1..=watched.node_count()).collect::<Vec<_>>());
            }
        }
    }
}
