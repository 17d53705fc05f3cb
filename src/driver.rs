//! The command driver: runs one strategy on one environment and formats what it found.
use itertools::Itertools;
use log::{debug, warn};

use crate::observer::StepObserver;
use crate::{Algorithm, Cell, Direction, Grid, Heuristic, SearchOutcome};

/// The result of a single run, as reported on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The goal reached, [None] if no goal is reachable.
    pub goal: Option<Cell>,
    pub node_count: usize,
    pub path: Vec<Cell>,
}

impl Report {
    pub fn from_outcome(outcome: SearchOutcome) -> Report {
        Report {
            goal: outcome.goal(),
            node_count: outcome.node_count(),
            path: outcome.path,
        }
    }

    pub fn moves(&self) -> Vec<Direction> {
        path_to_moves(&self.path)
    }

    /// Three lines: `<filename> <method>`, `<goal> <node count>` and the move labels as a
    /// bracketed, quoted list. When no goal is reachable the second line reads
    /// `No goal is reachable; <node count>` and there is no third line.
    pub fn format(&self, filename: &str, method: &str) -> String {
        match self.goal {
            Some(goal) => format!(
                "{} {}\n{} {}\n[{}]",
                filename,
                method,
                goal,
                self.node_count,
                self.moves().iter().map(|m| format!("'{m}'")).join(", ")
            ),
            None => format!(
                "{} {}\nNo goal is reachable; {}",
                filename, method, self.node_count
            ),
        }
    }
}

/// Labels each step of `path` with the direction moved. Consecutive cells are expected to be
/// neighbours; a pair that is not gets no label.
pub fn path_to_moves(path: &[Cell]) -> Vec<Direction> {
    path.iter()
        .tuple_windows()
        .filter_map(|(a, b)| {
            let dir = a.dir_to(b);
            if dir.is_none() || a.manhattan_distance(b) != 1 {
                warn!("{} and {} are not neighbours, skipping move", a, b);
                return None;
            }
            dir
        })
        .collect()
}

/// Whether `path` can be walked on `grid` one unit step at a time from the start to a goal.
pub fn is_walkable(grid: &Grid, path: &[Cell]) -> bool {
    path.first() == Some(&grid.start())
        && path.last().is_some_and(|goal| grid.is_goal(goal))
        && path.iter().all(|c| grid.is_valid(c))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Runs `algorithm` on `grid`, reporting each expansion to `observer`.
pub fn navigate(
    grid: &Grid,
    algorithm: Algorithm,
    heuristic: Heuristic,
    observer: &mut dyn StepObserver,
) -> Report {
    debug!(
        "Running {} on {}x{} grid, goal reachable: {}",
        algorithm,
        grid.cols(),
        grid.rows(),
        grid.solvable()
    );
    let outcome = algorithm.strategy(heuristic).run(grid, observer);
    Report::from_outcome(outcome)
}
