use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first search.
///
/// Cells leave the queue in non-decreasing hop count, so the first time the
/// goal is dequeued its path has the fewest edges. Entry costs are ignored
/// while searching.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl PathfindingAlgorithm for BreadthFirst {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        _heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search {
        let mut parents = FxHashMap::default();
        let mut discovered = FxHashSet::default();
        let mut explored = Vec::new();
        let mut queue = VecDeque::from([start]);
        discovered.insert(start);

        while let Some(cell) = queue.pop_front() {
            if let Err(limit) = budget.spend() {
                return Search::aborted(explored, limit);
            }
            explored.push(cell);
            if cell == goal {
                return Search::found(reconstruct_path(&parents, start, goal), explored);
            }
            for next in grid.open_neighbors(cell) {
                if discovered.insert(next) {
                    parents.insert(next, cell);
                    queue.push_back(next);
                }
            }
        }
        Search::unreachable(explored)
    }
}
