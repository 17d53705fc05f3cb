use core::fmt;
use core::str::FromStr;
use fxhash::FxHashMap;
use log::{info, warn};

use crate::observer::{NoopObserver, StepObserver};
use crate::{Cell, Grid, Heuristic, NavigationError};

pub mod astar;
pub mod best_first;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod gbfs;
pub mod iddfs;
pub mod jps;

use astar::AstarSolver;
use best_first::BestFirstSolver;
use bfs::BfsSolver;
use bidirectional::BidirectionalAstarSolver;
use dfs::DfsSolver;
use gbfs::GbfsSolver;
use iddfs::IddfsSolver;
use jps::JpsSolver;

/// Parent links from a cell to the cell it was reached from; the start maps to [None].
pub type ParentMap = FxHashMap<Cell, Option<Cell>>;

/// What a run leaves behind: the path from the start to a goal (empty if no goal could be
/// reached) and every expanded cell in expansion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<Cell>,
    pub moves: Vec<Cell>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// The goal the path ends in.
    pub fn goal(&self) -> Option<Cell> {
        self.path.last().copied()
    }
    /// Number of expansions, whether or not a goal was reached.
    pub fn node_count(&self) -> usize {
        self.moves.len()
    }
}

pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    /// Searches `grid` from its start to any of its goals, reporting each expansion to
    /// `observer`. Runs share no state, so repeated runs give identical outcomes.
    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome;

    /// [run](Self::run) without anyone watching.
    fn solve(&self, grid: &Grid) -> SearchOutcome {
        self.run(grid, &mut NoopObserver)
    }
}

/// Walks the parent chain from `goal` back to the start. Returns an empty path if `goal` was
/// never reached, which only happens when the bookkeeping of a strategy is broken.
pub fn reconstruct_path(parents: &ParentMap, goal: Cell) -> Vec<Cell> {
    if !parents.contains_key(&goal) {
        warn!("{} has no parent record, cannot reconstruct path", goal);
        return Vec::new();
    }
    let mut path: Vec<Cell> =
        std::iter::successors(Some(goal), |cell| parents.get(cell).copied().flatten()).collect();
    path.reverse();
    path
}

/// Shared ending of the strategies that keep a [ParentMap].
pub(crate) fn finish(
    name: &str,
    parents: &ParentMap,
    reached: Option<Cell>,
    moves: Vec<Cell>,
) -> SearchOutcome {
    match reached {
        Some(goal) => {
            info!("{}: goal reached at {} after {} expansions", name, goal, moves.len());
            SearchOutcome {
                path: reconstruct_path(parents, goal),
                moves,
            }
        }
        None => {
            info!("{}: no path to goal found after {} expansions", name, moves.len());
            SearchOutcome {
                path: Vec::new(),
                moves,
            }
        }
    }
}

/// The selectable strategies. Two of the command names are aliases: `CUS1` runs iterative
/// deepening and `CUS2` the best-first variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Gbfs,
    Astar,
    Iddfs,
    BestFirst,
    BidirectionalAstar,
    Jps,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Gbfs,
        Algorithm::Astar,
        Algorithm::Iddfs,
        Algorithm::BestFirst,
        Algorithm::BidirectionalAstar,
        Algorithm::Jps,
    ];

    /// Builds the strategy, handing `heuristic` to the informed ones.
    pub fn strategy(self, heuristic: Heuristic) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver),
            Algorithm::Dfs => Box::new(DfsSolver),
            Algorithm::Gbfs => Box::new(GbfsSolver::new(heuristic)),
            Algorithm::Astar => Box::new(AstarSolver::new(heuristic)),
            Algorithm::Iddfs => Box::new(IddfsSolver),
            Algorithm::BestFirst => Box::new(BestFirstSolver::new(heuristic)),
            Algorithm::BidirectionalAstar => Box::new(BidirectionalAstarSolver::new(heuristic)),
            Algorithm::Jps => Box::new(JpsSolver::new(heuristic)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Algorithm, NavigationError> {
        match s.to_ascii_uppercase().as_str() {
            "BFS" => Ok(Algorithm::Bfs),
            "DFS" => Ok(Algorithm::Dfs),
            "GBFS" => Ok(Algorithm::Gbfs),
            "AS" => Ok(Algorithm::Astar),
            "IDDFS" | "CUS1" => Ok(Algorithm::Iddfs),
            "CUS2" => Ok(Algorithm::BestFirst),
            "BDAS" => Ok(Algorithm::BidirectionalAstar),
            "JPS" => Ok(Algorithm::Jps),
            _ => Err(NavigationError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Gbfs => "GBFS",
            Algorithm::Astar => "AS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::BestFirst => "CUS2",
            Algorithm::BidirectionalAstar => "BDAS",
            Algorithm::Jps => "JPS",
        };
        f.write_str(name)
    }
}
