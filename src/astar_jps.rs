/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which lets successors depend on the parent (as JPS needs), reports every expansion and
/// keeps its bookkeeping around after the search so both halves of a bidirectional search can
/// be intersected.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K, N> {
    estimated_cost: K,
    node: N,
    cost: K,
    index: usize,
}

impl<K: Ord, N: Ord> Eq for SmallestCostHolder<K, N> {}

impl<K: Ord, N: Ord> PartialEq for SmallestCostHolder<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, N: Ord> PartialOrd for SmallestCostHolder<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, N: Ord> Ord for SmallestCostHolder<K, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimate first, equal estimates by node order, as a heap of
        // (estimate, node) tuples would pop them.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Bookkeeping left behind by [astar_jps]. `parents` maps every discovered node to the index
/// of its parent and the best known cost; the start has parent index [usize::MAX].
pub(crate) struct Exploration<N, C> {
    pub parents: FxIndexMap<N, (usize, C)>,
    pub moves: Vec<N>,
    pub reached: Option<usize>,
}

impl<N: Eq + Hash + Clone, C: Copy> Exploration<N, C> {
    /// The path from the start to the reached goal, if one was reached.
    pub fn path(&self) -> Option<Vec<N>> {
        self.reached.map(|index| self.path_to(index))
    }
    pub fn reached_node(&self) -> Option<&N> {
        self.reached
            .and_then(|index| self.parents.get_index(index))
            .map(|(node, _)| node)
    }
    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }
    /// Walks the parent chain from the node at `index` back to the start.
    pub fn path_to(&self, index: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut i = index;
        while let Some((node, &(parent, _))) = self.parents.get_index(i) {
            path.push(node.clone());
            i = parent;
        }
        path.reverse();
        path
    }
}

/// Cost-ordered search from `start`. Nodes are expanded in order of cost plus `heuristic`,
/// ties going to the smaller node. A cheaper route to a node still waiting in the frontier
/// replaces its parent and cost; the outdated heap entry is skipped when popped. Expanded
/// nodes are closed for good. `observe` sees the expansion order after every expansion,
/// before the `success` test.
pub(crate) fn astar_jps<N, C, FN, IN, FH, FS, FO>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut observe: FO,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone + Ord,
    C: Zero + Ord + Copy,
    FN: FnMut(Option<&N>, &N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    FO: FnMut(&[N]),
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        node: start.clone(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut moves: Vec<N> = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        if closed.contains(&index) {
            continue;
        }
        let successors = {
            let Some((node, &(parent_index, c))) = parents.get_index(index) else {
                warn!("Frontier entry {} has no parent record", index);
                continue;
            };
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            moves.push(node.clone());
            observe(&moves);
            if success(node) {
                return Exploration {
                    parents,
                    moves,
                    reached: Some(index),
                };
            }
            closed.insert(index);
            let optional_parent_node = parents.get_index(parent_index).map(|x| x.0);
            successors(optional_parent_node, node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            let node; // successor, kept for tie-breaking
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    node = e.key().clone();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if !closed.contains(&e.index()) && e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        node = e.key().clone();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                node,
                cost: new_cost,
                index: n,
            });
        }
    }
    Exploration {
        parents,
        moves,
        reached: None,
    }
}
