use fxhash::FxHashSet;
use log::debug;

use crate::observer::StepObserver;
use crate::solver::{finish, ParentMap, SearchOutcome, SearchStrategy};
use crate::{Cell, Grid};

/// Depth-first search with an explicit stack. A cell may sit on the stack several times; the
/// copy pushed last wins, both for expansion order and for its parent link. Already visited
/// cells are skipped when popped and do not count as expansions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl SearchStrategy for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        debug!("{}: searching from {}", self.name(), start);
        let mut stack = vec![start];
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        let mut parents = ParentMap::default();
        parents.insert(start, None);
        let mut moves = Vec::new();
        let mut reached = None;

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            moves.push(current);
            observer.on_step(&moves);
            if grid.is_goal(&current) {
                reached = Some(current);
                break;
            }
            for n in grid.neighbors(&current) {
                if !visited.contains(&n) {
                    stack.push(n);
                    parents.insert(n, Some(current));
                }
            }
        }
        finish(self.name(), &parents, reached, moves)
    }
}
