use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Found,
    Unreachable,
    /// The search expanded `limit` cells without settling the goal.
    StepLimit { limit: usize },
}

/// Raw trace of one search. The runner turns it into a `PathResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub path: Vec<Cell>,
    /// Unique cells in the order they were expanded.
    pub explored: Vec<Cell>,
    pub outcome: Outcome,
}

impl Search {
    pub(crate) fn found(path: Vec<Cell>, explored: Vec<Cell>) -> Self {
        Search {
            path,
            explored,
            outcome: Outcome::Found,
        }
    }

    pub(crate) fn unreachable(explored: Vec<Cell>) -> Self {
        Search {
            path: Vec::new(),
            explored,
            outcome: Outcome::Unreachable,
        }
    }

    pub(crate) fn aborted(explored: Vec<Cell>, limit: usize) -> Self {
        Search {
            path: Vec::new(),
            explored,
            outcome: Outcome::StepLimit { limit },
        }
    }
}

/// Caps the number of cells a search may expand.
#[derive(Debug, Clone, Copy)]
pub struct StepBudget {
    limit: Option<usize>,
    used: usize,
}

impl StepBudget {
    pub fn new(limit: Option<usize>) -> Self {
        StepBudget { limit, used: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Charges one expansion. Returns `Err(limit)` once the budget is spent.
    pub fn spend(&mut self) -> Result<(), usize> {
        match self.limit {
            Some(limit) if self.used >= limit => Err(limit),
            _ => {
                self.used += 1;
                Ok(())
            }
        }
    }

    pub fn used(&self) -> usize {
        self.used
    }
}

/// A search strategy. Implementations hold no state between calls, so one
/// instance can serve any number of concurrent runs.
///
/// `start` and `goal` are in bounds and distinct; the runner checks that
/// before calling.
pub trait PathfindingAlgorithm: Sync {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search;
}

/// Walks parent links back from `goal` to `start`.
pub(crate) fn reconstruct_path(parents: &FxHashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_stops_at_limit() {
        let mut budget = StepBudget::new(Some(2));
        assert!(budget.spend().is_ok());
        assert!(budget.spend().is_ok());
        assert_eq!(budget.spend(), Err(2));
        assert_eq!(budget.used(), 2);

        let mut unlimited = StepBudget::unlimited();
        for _ in 0..1000 {
            assert!(unlimited.spend().is_ok());
        }
    }

    #[test]
    fn path_follows_parents() {
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        let c = Cell::new(1, 1);
        let mut parents = FxHashMap::default();
        parents.insert(b, a);
        parents.insert(c, b);
        assert_eq!(reconstruct_path(&parents, a, c), vec![a, b, c]);
        assert!(reconstruct_path(&parents, c, a).is_empty());
    }
}
