use log::{debug, trace};
use smallvec::SmallVec;

use crate::observer::StepObserver;
use crate::solver::{finish, ParentMap, SearchOutcome, SearchStrategy};
use crate::{Cell, Grid};

/// Iterative deepening depth-first search. Depth-limited searches are repeated with limits
/// `0, 1, ..` up to the number of cells in the grid. Expansions of every iteration count
/// towards the trace, so cells near the start are reported many times.
///
/// Within one iteration a cell is entered at most once: the parent map is shared by the whole
/// iteration and a neighbour is skipped as soon as it has a parent. The path found is
/// therefore not always a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct IddfsSolver;

struct Frame {
    cell: Cell,
    depth: usize,
    neighbors: SmallVec<[Cell; 4]>,
    next: usize,
}

/// Records the visit of `cell` and returns whether it is a goal.
fn visit(grid: &Grid, cell: Cell, moves: &mut Vec<Cell>, observer: &mut dyn StepObserver) -> bool {
    moves.push(cell);
    observer.on_step(moves);
    grid.is_goal(&cell)
}

/// One depth-limited search. Returns the goal reached, if any, with `parents` describing the
/// way to it.
fn depth_limited(
    grid: &Grid,
    limit: usize,
    parents: &mut ParentMap,
    moves: &mut Vec<Cell>,
    observer: &mut dyn StepObserver,
) -> Option<Cell> {
    let start = grid.start();
    if visit(grid, start, moves, observer) {
        return Some(start);
    }
    if limit == 0 {
        return None;
    }
    let mut stack = vec![Frame {
        cell: start,
        depth: limit,
        neighbors: grid.neighbors(&start),
        next: 0,
    }];
    while let Some(frame) = stack.last_mut() {
        let Some(&n) = frame.neighbors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        if parents.contains_key(&n) {
            continue;
        }
        let (cell, depth) = (frame.cell, frame.depth - 1);
        parents.insert(n, Some(cell));
        if visit(grid, n, moves, observer) {
            return Some(n);
        }
        if depth > 0 {
            stack.push(Frame {
                cell: n,
                depth,
                neighbors: grid.neighbors(&n),
                next: 0,
            });
        }
    }
    None
}

impl SearchStrategy for IddfsSolver {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    fn run(&self, grid: &Grid, observer: &mut dyn StepObserver) -> SearchOutcome {
        let start = grid.start();
        let max_depth = grid.cell_count();
        debug!("{}: searching from {} up to depth {}", self.name(), start, max_depth);
        let mut moves = Vec::new();
        let mut parents = ParentMap::default();
        for limit in 0..max_depth {
            parents.clear();
            parents.insert(start, None);
            if let Some(goal) = depth_limited(grid, limit, &mut parents, &mut moves, observer) {
                return finish(self.name(), &parents, Some(goal), moves);
            }
            trace!("{}: depth {} exhausted after {} expansions", self.name(), limit, moves.len());
        }
        finish(self.name(), &parents, None, moves)
    }
}
