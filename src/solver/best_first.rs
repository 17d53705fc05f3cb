use crate::observer::StepObserver;
use crate::solver::gbfs::greedy_search;
use crate::solver::{SearchOutcome, SearchStrategy};
use crate::{Grid, Heuristic};

/// Best-first search ranking the frontier by the heuristic, like [GbfsSolver](super::gbfs::GbfsSolver)
/// except that the start cell is ranked by its own estimate too. Selected by the `CUS2` method.
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver {
    pub heuristic: Heuristic,
}

impl BestFirstSolver {
    pub fn new(heuristic: Heuristic) -> BestFirstSolver {
        BestFirstSolver { heuristic }
    }
}

impl SearchStrategy for BestFirstSolver {
    fn name(&self) -> &'static str {
        "Best-First"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        let start_priority = self.heuristic.to_nearest(&start, grid.goals());
        greedy_search(self.name(), grid, self.heuristic, start_priority, observer)
    }
}
