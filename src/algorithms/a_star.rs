use crate::algorithms::best_first::best_first;
use crate::algorithms::common::{PathfindingAlgorithm, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;

/// A* search: frontier ordered by `cost + heuristic(cell, goal)`.
///
/// The path is lowest-cost only when the heuristic is admissible. The
/// runner refuses to call this without a heuristic; a missing one falls
/// back to [`Heuristic::Zero`], which makes it behave like Dijkstra.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search {
        let heuristic = heuristic.unwrap_or(Heuristic::Zero);
        best_first(grid, start, goal, budget, |cell, cost| {
            cost as f64 + heuristic.estimate(cell, goal)
        })
    }
}
