use fxhash::FxHashSet;
use log::debug;
use std::collections::VecDeque;

use crate::observer::StepObserver;
use crate::solver::{finish, ParentMap, SearchOutcome, SearchStrategy};
use crate::{Cell, Grid};

/// Breadth-first search. A FIFO frontier finds a path with the fewest moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl SearchStrategy for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        debug!("{}: searching from {}", self.name(), start);
        let mut queue = VecDeque::from([start]);
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        visited.insert(start);
        let mut parents = ParentMap::default();
        parents.insert(start, None);
        let mut moves = Vec::new();
        let mut reached = None;

        while let Some(current) = queue.pop_front() {
            moves.push(current);
            observer.on_step(&moves);
            if grid.is_goal(&current) {
                reached = Some(current);
                break;
            }
            for n in grid.neighbors(&current) {
                if visited.insert(n) {
                    parents.insert(n, Some(current));
                    queue.push_back(n);
                }
            }
        }
        finish(self.name(), &parents, reached, moves)
    }
}
