use log::{debug, info};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::astar_jps::astar_jps;
use crate::heuristic::Cost;
use crate::observer::StepObserver;
use crate::solver::{SearchOutcome, SearchStrategy};
use crate::{Cell, Grid, Heuristic};

/// A* with unit move costs. The frontier is ordered by cost so far plus the heuristic
/// estimate to the nearest goal, ties going to the smaller cell.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }

    pub(crate) fn successors(grid: &Grid, node: &Cell) -> SmallVec<[(Cell, Cost); 4]> {
        grid.neighbors(node)
            .into_iter()
            .map(|n| (n, OrderedFloat(1.0)))
            .collect()
    }
}

impl SearchStrategy for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        debug!("{}: searching from {} using {}", self.name(), start, self.heuristic);
        let result = astar_jps(
            &start,
            |_, node| Self::successors(grid, node),
            |point| self.heuristic.to_nearest(point, grid.goals()),
            |point| grid.is_goal(point),
            |moves| observer.on_step(moves),
        );
        match result.path() {
            Some(path) => {
                info!(
                    "{}: goal reached at {} after {} expansions",
                    self.name(),
                    path[path.len() - 1],
                    result.moves.len()
                );
                SearchOutcome {
                    path,
                    moves: result.moves,
                }
            }
            None => {
                info!(
                    "{}: no path to goal found after {} expansions",
                    self.name(),
                    result.moves.len()
                );
                SearchOutcome {
                    path: Vec::new(),
                    moves: result.moves,
                }
            }
        }
    }
}
