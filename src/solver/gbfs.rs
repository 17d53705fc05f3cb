use core::cmp::Reverse;
use fxhash::FxHashSet;
use log::debug;
use std::collections::BinaryHeap;

use crate::heuristic::Cost;
use crate::observer::StepObserver;
use crate::solver::{finish, ParentMap, SearchOutcome, SearchStrategy};
use crate::{Cell, Grid, Heuristic};

/// Greedy best-first search: the frontier is ordered by the heuristic alone, ties going to
/// the smaller cell. A cell enters the frontier once, with the parent that discovered it.
#[derive(Clone, Debug, Default)]
pub struct GbfsSolver {
    pub heuristic: Heuristic,
}

impl GbfsSolver {
    pub fn new(heuristic: Heuristic) -> GbfsSolver {
        GbfsSolver { heuristic }
    }
}

/// The greedy loop shared with the [best-first variant](super::best_first). Only the priority
/// given to the start cell differs between the two.
pub(crate) fn greedy_search(
    name: &'static str,
    grid: &Grid,
    heuristic: Heuristic,
    start_priority: Cost,
    observer: &mut dyn StepObserver,
) -> SearchOutcome {
    let start = grid.start();
    debug!("{}: searching from {} using {}", name, start, heuristic);
    let mut open_set: BinaryHeap<Reverse<(Cost, Cell)>> = BinaryHeap::new();
    open_set.push(Reverse((start_priority, start)));
    let mut in_open: FxHashSet<Cell> = FxHashSet::default();
    in_open.insert(start);
    let mut closed: FxHashSet<Cell> = FxHashSet::default();
    let mut parents = ParentMap::default();
    parents.insert(start, None);
    let mut moves = Vec::new();
    let mut reached = None;

    while let Some(Reverse((_, current))) = open_set.pop() {
        in_open.remove(&current);
        moves.push(current);
        observer.on_step(&moves);
        if grid.is_goal(&current) {
            reached = Some(current);
            break;
        }
        closed.insert(current);
        for n in grid.neighbors(&current) {
            if closed.contains(&n) || !in_open.insert(n) {
                continue;
            }
            parents.insert(n, Some(current));
            open_set.push(Reverse((heuristic.to_nearest(&n, grid.goals()), n)));
        }
    }
    finish(name, &parents, reached, moves)
}

impl SearchStrategy for GbfsSolver {
    fn name(&self) -> &'static str {
        "GBFS"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        greedy_search(self.name(), grid, self.heuristic, Cost::default(), observer)
    }
}
