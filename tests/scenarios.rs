use robot_navigation::driver::{is_walkable, navigate, Report};
use robot_navigation::observer::{Animator, NoopObserver};
use robot_navigation::solver::bidirectional::BidirectionalAstarSolver;
use robot_navigation::{
    Algorithm, Cell, Direction, Environment, Grid, Heuristic, NavigationError, SearchStrategy,
    Wall,
};

const SAMPLE: &str = "\
(5,11)
(0,1)
(7,0) | (10,3)
(2,0,2,2)
(8,0,1,2)
(10,0,1,1)
(2,3,1,2)
(3,4,3,1)
(9,3,1,1)
(8,4,2,1)
";

fn run(grid: &Grid, method: &str) -> Report {
    let algorithm: Algorithm = method.parse().unwrap();
    navigate(grid, algorithm, Heuristic::Manhattan, &mut NoopObserver)
}

#[test]
fn open_three_by_three() {
    let grid = Grid::new(3, 3, Cell::new(0, 0), [Cell::new(2, 2)], &[]).unwrap();
    let report = run(&grid, "BFS");
    assert_eq!(report.path.len(), 5);
    assert!(report.node_count <= 9);
    assert_eq!(
        report.moves(),
        vec![
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Down
        ]
    );
    for algorithm in Algorithm::ALL {
        let report = navigate(&grid, algorithm, Heuristic::Manhattan, &mut NoopObserver);
        assert_eq!(report.goal, Some(Cell::new(2, 2)), "{algorithm}");
        assert!(is_walkable(&grid, &report.path), "{algorithm}");
    }
}

#[test]
fn corridor_blocked_by_wall() {
    let environment: Environment = "(4,6)\n(0,0)\n(5,3)\n(3,0,1,4)\n".parse().unwrap();
    let grid = environment.to_grid().unwrap();
    let component = grid.component_size(&grid.start());
    assert_eq!(component, 12);
    for method in ["BFS", "DFS", "GBFS", "AS", "CUS2"] {
        let report = run(&grid, method);
        assert_eq!(report.goal, None, "{method}");
        assert!(report.path.is_empty());
        assert_eq!(report.node_count, component, "{method}");
    }
    for method in ["IDDFS", "CUS1", "BDAS", "JPS"] {
        let report = run(&grid, method);
        assert_eq!(report.goal, None, "{method}");
        assert!(report.path.is_empty());
    }
    assert_eq!(
        run(&grid, "AS").format("blocked.txt", "AS"),
        "blocked.txt AS\nNo goal is reachable; 12"
    );
}

#[test]
fn nearest_goal_first() {
    // The first listed goal is further away than the second.
    let grid = Grid::new(
        1,
        10,
        Cell::new(4, 0),
        [Cell::new(9, 0), Cell::new(2, 0)],
        &[],
    )
    .unwrap();
    let report = run(&grid, "AS");
    assert_eq!(report.goal, Some(Cell::new(2, 0)));
    assert_eq!(report.moves(), vec![Direction::Left, Direction::Left]);
    assert_eq!(run(&grid, "BFS").goal, Some(Cell::new(2, 0)));
}

#[test]
fn bidirectional_meeting() {
    let grid = SAMPLE.parse::<Environment>().unwrap().to_grid().unwrap();
    let solver = BidirectionalAstarSolver::new(Heuristic::Manhattan);
    let (outcome, meeting) = solver.search(&grid);
    let meeting = meeting.unwrap();
    assert!(outcome.path.contains(&meeting.cell));
    assert!(grid.reachable(&grid.start(), &meeting.cell));
    assert!(is_walkable(&grid, &outcome.path));
    let shortest = Algorithm::Bfs.strategy(Heuristic::Manhattan).solve(&grid);
    assert_eq!(outcome.path.len(), shortest.path.len());
}

#[test]
fn sample_environment() {
    let environment: Environment = SAMPLE.parse().unwrap();
    assert_eq!((environment.rows, environment.cols), (5, 11));
    assert_eq!(environment.goals, vec![Cell::new(7, 0), Cell::new(10, 3)]);
    assert_eq!(environment.walls.len(), 7);
    let grid = environment.to_grid().unwrap();
    assert!(grid.solvable());

    let shortest = run(&grid, "BFS");
    assert!(is_walkable(&grid, &shortest.path));
    for method in ["DFS", "GBFS", "AS", "CUS1", "CUS2", "BDAS", "JPS"] {
        let report = run(&grid, method);
        assert!(report.goal.is_some(), "{method}");
        assert!(is_walkable(&grid, &report.path), "{method}");
        assert!(report.path.len() >= shortest.path.len(), "{method}");
    }
    assert_eq!(run(&grid, "AS").path.len(), shortest.path.len());

    let output = shortest.format("RobotNav-test.txt", "BFS");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "RobotNav-test.txt BFS");
    assert!(lines[1].ends_with(&format!(" {}", shortest.node_count)));
    assert!(lines[2].starts_with("['") && lines[2].ends_with("']"));
}

/// With a goal on either side of a pillar, only DFS settles for the further one.
#[test]
fn closest_of_two_goals() {
    // S.G
    // .#.
    // ..G
    let grid = Grid::new(
        3,
        3,
        Cell::new(0, 0),
        [Cell::new(2, 2), Cell::new(2, 0)],
        &[Wall::new(1, 1, 1, 1)],
    )
    .unwrap();
    for algorithm in Algorithm::ALL {
        let report = navigate(&grid, algorithm, Heuristic::Manhattan, &mut NoopObserver);
        let expected = if algorithm == Algorithm::Dfs {
            Cell::new(2, 2)
        } else {
            Cell::new(2, 0)
        };
        assert_eq!(report.goal, Some(expected), "{algorithm}");
    }
}

/// Extreme numbers in an otherwise well-formed file give a grid or a configuration error.
#[test]
fn extreme_environment_values() {
    let wide_wall: Environment = "(3,3)\n(0,0)\n(2,2)\n(1,1,2147483647,1)\n".parse().unwrap();
    let grid = wide_wall.to_grid().unwrap();
    assert_eq!(grid.blocked().len(), 2);
    assert_eq!(run(&grid, "BFS").goal, Some(Cell::new(2, 2)));

    let huge: Environment = "(70000,70000)\n(0,0)\n(2,2)\n".parse().unwrap();
    assert!(matches!(
        huge.to_grid(),
        Err(NavigationError::InvalidDimensions { .. })
    ));
}

#[test]
fn unknown_method() {
    assert!("UCS".parse::<Algorithm>().is_err());
}

#[test]
fn animation_frames() {
    let grid = Grid::new(2, 2, Cell::new(0, 0), [Cell::new(1, 1)], &[]).unwrap();
    let mut animator = Animator::new(&grid, Vec::new());
    let report = navigate(&grid, Algorithm::Bfs, Heuristic::Manhattan, &mut animator);
    let text = String::from_utf8(animator.into_inner()).unwrap();
    assert_eq!(text.matches("step ").count(), report.node_count);
    assert!(text.starts_with("step 1 (0, 0)\nS.\n.G\n"));
}
