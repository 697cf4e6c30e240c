use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search.
///
/// Follows one branch until it dead-ends before backing up. Each cell is
/// expanded at most once, so the search always terminates, but the path it
/// returns is whichever branch reached the goal first, not the shortest.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl PathfindingAlgorithm for DepthFirst {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        _heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search {
        let mut parents = FxHashMap::default();
        let mut visited = FxHashSet::default();
        let mut explored = Vec::new();
        let mut stack: Vec<(Cell, Option<Cell>)> = vec![(start, None)];

        while let Some((cell, parent)) = stack.pop() {
            if !visited.insert(cell) {
                continue;
            }
            if let Err(limit) = budget.spend() {
                return Search::aborted(explored, limit);
            }
            explored.push(cell);
            if let Some(parent) = parent {
                parents.insert(cell, parent);
            }
            if cell == goal {
                return Search::found(reconstruct_path(&parents, start, goal), explored);
            }

            // Pushed in reverse so the first open direction is explored first.
            let unvisited: Vec<Cell> = grid
                .open_neighbors(cell)
                .filter(|next| !visited.contains(next))
                .collect();
            stack.extend(unvisited.into_iter().rev().map(|next| (next, Some(cell))));
        }
        Search::unreachable(explored)
    }
}
