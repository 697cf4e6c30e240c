use crate::algorithms::best_first::best_first;
use crate::algorithms::common::{PathfindingAlgorithm, Search, StepBudget};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;

/// Greedy best-first search: always expands the cell that looks closest to
/// the goal, ignoring the cost paid so far. Usually explores little, with
/// no guarantee on path cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyBestFirst;

impl PathfindingAlgorithm for GreedyBestFirst {
    fn search(
        &self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        heuristic: Option<Heuristic>,
        budget: &mut StepBudget,
    ) -> Search {
        let heuristic = heuristic.unwrap_or(Heuristic::Zero);
        best_first(grid, start, goal, budget, |cell, _| heuristic.estimate(cell, goal))
    }
}
