use log::{debug, info};

use crate::astar_jps::{astar_jps, Exploration};
use crate::heuristic::Cost;
use crate::observer::StepObserver;
use crate::solver::astar::AstarSolver;
use crate::solver::{SearchOutcome, SearchStrategy};
use crate::{Cell, Grid, Heuristic};

/// Two A* searches, one from the start towards the goals and one back from the goal the
/// first reached towards the start. The final path passes through the cell discovered by both
/// sides with the smallest combined cost.
///
/// Both searches run to completion before they are intersected, so expansions are not
/// reported to the observer. The trace holds the forward expansions followed by the backward
/// ones.
#[derive(Clone, Debug, Default)]
pub struct BidirectionalAstarSolver {
    pub heuristic: Heuristic,
}

/// Where the two searches met.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meeting {
    pub cell: Cell,
    pub forward_cost: Cost,
    pub backward_cost: Cost,
}

impl BidirectionalAstarSolver {
    pub fn new(heuristic: Heuristic) -> BidirectionalAstarSolver {
        BidirectionalAstarSolver { heuristic }
    }

    fn explore<'a, I>(&self, grid: &Grid, from: Cell, targets: I) -> Exploration<Cell, Cost>
    where
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        astar_jps(
            &from,
            |_, node| AstarSolver::successors(grid, node),
            |point| self.heuristic.to_nearest(point, targets.clone()),
            |point| targets.clone().into_iter().any(|t| t == point),
            |_| {},
        )
    }

    /// Runs both searches and joins them. The [Meeting] is [None] when no goal is reachable.
    pub fn search(&self, grid: &Grid) -> (SearchOutcome, Option<Meeting>) {
        let start = grid.start();
        let forward = self.explore(grid, start, grid.goals());
        let mut moves = forward.moves.clone();
        let Some(&goal) = forward.reached_node() else {
            return (SearchOutcome { path: Vec::new(), moves }, None);
        };
        debug!("{}: forward search reached {}, searching back", self.name(), goal);
        let backward = self.explore(grid, goal, [start].iter());
        moves.extend_from_slice(&backward.moves);

        let meeting = forward
            .parents
            .iter()
            .filter_map(|(cell, &(_, forward_cost))| {
                let backward_cost = backward.cost(cell)?;
                Some(Meeting {
                    cell: *cell,
                    forward_cost,
                    backward_cost,
                })
            })
            .min_by_key(|m| (m.forward_cost + m.backward_cost, m.cell));
        let Some(meeting) = meeting else {
            return (SearchOutcome { path: Vec::new(), moves }, None);
        };

        let mut path = match forward.parents.get_index_of(&meeting.cell) {
            Some(index) => forward.path_to(index),
            None => Vec::new(),
        };
        if let Some(index) = backward.parents.get_index_of(&meeting.cell) {
            path.extend(backward.path_to(index).into_iter().rev().skip(1));
        }
        (SearchOutcome { path, moves }, Some(meeting))
    }
}

impl SearchStrategy for BidirectionalAstarSolver {
    fn name(&self) -> &'static str {
        "Bidirectional A*"
    }

    fn run(&self, grid: &Grid, _observer: &mut dyn StepObserver) -> SearchOutcome {
        let (outcome, meeting) = self.search(grid);
        match meeting {
            Some(m) => info!(
                "{}: searches met at {} with cost {}, goal {:?}",
                self.name(),
                m.cell,
                m.forward_cost + m.backward_cost,
                outcome.goal()
            ),
            None => info!(
                "{}: no path to goal found after {} expansions",
                self.name(),
                outcome.node_count()
            ),
        }
        outcome
    }
}
