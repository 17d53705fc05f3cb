use log::{debug, info};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::astar_jps::astar_jps;
use crate::heuristic::Cost;
use crate::observer::StepObserver;
use crate::solver::astar::AstarSolver;
use crate::solver::{SearchOutcome, SearchStrategy};
use crate::{waypoints_to_path, Cell, Direction, Grid, Heuristic};

/// Jump Point Search for 4-directional movement. Instead of unit neighbours, a node's
/// successors are the first interesting cells along straight lines: goals and cells next to
/// an obstacle corner that open up a new way around it. Vertical jumps additionally stop
/// where a horizontal sweep would find such a cell, which keeps the search complete without
/// diagonal moves.
///
/// The expansion trace holds jump points only; the returned path is interpolated between
/// them so it can be followed one step at a time.
#[derive(Clone, Debug, Default)]
pub struct JpsSolver {
    pub heuristic: Heuristic,
}

impl JpsSolver {
    pub fn new(heuristic: Heuristic) -> JpsSolver {
        JpsSolver { heuristic }
    }

    fn successors(
        &self,
        grid: &Grid,
        parent: Option<&Cell>,
        node: &Cell,
    ) -> SmallVec<[(Cell, Cost); 4]> {
        let Some(dir) = parent.and_then(|p| p.dir_to(node)) else {
            // For the start, just generate the full normal neighborhood without any jumping.
            return AstarSolver::successors(grid, node);
        };
        let [side_a, side_b] = dir.perpendicular();
        [dir, side_a, side_b]
            .into_iter()
            .filter_map(|d| self.jump(grid, *node, d))
            .map(|jumped| {
                let cost = node.manhattan_distance(&jumped);
                (jumped, OrderedFloat(cost as f64))
            })
            .collect()
    }

    /// Whether stepping from `prev` onto `node` while moving in `dir` exposes a cell beside
    /// `node` that was hidden behind a wall beside `prev`.
    fn is_forced(&self, grid: &Grid, prev: &Cell, node: &Cell, dir: Direction) -> bool {
        dir.perpendicular()
            .into_iter()
            .any(|side| grid.is_valid(&(*node + side)) && !grid.is_valid(&(*prev + side)))
    }

    /// Straight jump from `initial` in `dir`. Returns the first jump point met, if any.
    fn jump(&self, grid: &Grid, initial: Cell, dir: Direction) -> Option<Cell> {
        let mut current = initial;
        loop {
            let next = current + dir;
            if !grid.is_valid(&next) {
                return None;
            }
            if grid.is_goal(&next) || self.is_forced(grid, &current, &next, dir) {
                return Some(next);
            }
            if dir.is_vertical()
                && (self.scan(grid, next, Direction::Right) || self.scan(grid, next, Direction::Left))
            {
                return Some(next);
            }
            current = next;
        }
    }

    /// Horizontal sweep used by vertical jumps: does a horizontal jump from `initial` find
    /// a jump point?
    fn scan(&self, grid: &Grid, initial: Cell, dir: Direction) -> bool {
        let mut current = initial;
        loop {
            let next = current + dir;
            if !grid.is_valid(&next) {
                return false;
            }
            if grid.is_goal(&next) || self.is_forced(grid, &current, &next, dir) {
                return true;
            }
            current = next;
        }
    }
}

impl SearchStrategy for JpsSolver {
    fn name(&self) -> &'static str {
        "JPS"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        debug!("{}: searching from {} using {}", self.name(), start, self.heuristic);
        let result = astar_jps(
            &start,
            |parent, node| self.successors(grid, parent, node),
            |point| self.heuristic.to_nearest(point, grid.goals()),
            |point| grid.is_goal(point),
            |moves| observer.on_step(moves),
        );
        let path = result.path().map(waypoints_to_path).unwrap_or_default();
        match path.last() {
            Some(goal) => info!(
                "{}: goal reached at {} after {} jump point expansions",
                self.name(),
                goal,
                result.moves.len()
            ),
            None => info!(
                "{}: no path to goal found after {} jump point expansions",
                self.name(),
                result.moves.len()
            ),
        }
        SearchOutcome {
            path,
            moves: result.moves,
        }
    }
}
