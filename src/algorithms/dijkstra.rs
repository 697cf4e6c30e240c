use crate::algorithms::best_first::best_first;
use crate::algorithms::common::{PathfindingAlgorithm, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;

/// Uniform-cost search: frontier ordered by accumulated entry cost.
/// Returns a lowest-cost path for any entry costs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        _heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search {
        best_first(grid, start, goal, budget, |_, cost| cost as f64)
    }
}
