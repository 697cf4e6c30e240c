use crate::algorithms::common::{reconstruct_path, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry. `Ord` is reversed so `BinaryHeap` pops the lowest
/// priority first; equal priorities pop in insertion order.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    sequence: u64,
    cell: Cell,
    cost: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Priority-ordered search shared by Dijkstra, A* and greedy best-first.
///
/// `priority` receives a cell and its accumulated cost. A cell is pushed
/// again whenever a strictly cheaper route to it shows up, and stale frontier
/// entries are skipped on pop, so an admissible but inconsistent priority
/// still yields the lowest-cost path.
pub(crate) fn best_first<P>(
    grid: &GridModel,
    start: Cell,
    goal: Cell,
    budget: &mut StepBudget,
    priority: P,
) -> Search
where
    P: Fn(Cell, u64) -> f64,
{
    let mut best_cost: FxHashMap<Cell, u64> = FxHashMap::default();
    let mut parents = FxHashMap::default();
    let mut expanded = FxHashSet::default();
    let mut explored = Vec::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    best_cost.insert(start, 0);
    frontier.push(Entry {
        priority: priority(start, 0),
        sequence,
        cell: start,
        cost: 0,
    });

    while let Some(Entry { cell, cost, .. }) = frontier.pop() {
        if best_cost.get(&cell).is_some_and(|&best| cost > best) {
            continue;
        }
        if let Err(limit) = budget.spend() {
            return Search::aborted(explored, limit);
        }
        if expanded.insert(cell) {
            explored.push(cell);
        }
        if cell == goal {
            return Search::found(reconstruct_path(&parents, start, goal), explored);
        }

        for next in grid.open_neighbors(cell) {
            let next_cost = cost.saturating_add(u64::from(grid.entry_cost(next)));
            if best_cost.get(&next).map_or(true, |&best| next_cost < best) {
                best_cost.insert(next, next_cost);
                parents.insert(next, cell);
                sequence += 1;
                frontier.push(Entry {
                    priority: priority(next, next_cost),
                    sequence,
                    cell: next,
                    cost: next_cost,
                });
            }
        }
    }
    Search::unreachable(explored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: f64, sequence: u64) -> Entry {
        Entry {
            priority,
            sequence,
            cell: Cell::new(0, 0),
            cost: 0,
        }
    }

    #[test]
    fn lowest_priority_pops_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 0));
        heap.push(entry(1.0, 1));
        heap.push(entry(2.0, 2));
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop()).map(|e| e.priority).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for sequence in [4, 1, 3, 0, 2] {
            heap.push(entry(5.0, sequence));
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|e| e.sequence).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
