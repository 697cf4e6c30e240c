use crate::algorithms::{Algorithm, Outcome, StepBudget};
use crate::error::{MazeError, Result};
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Result of one (algorithm, heuristic) run, ready for overlay rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub algorithm: Algorithm,
    pub heuristic: Option<Heuristic>,
    /// Start to goal inclusive; empty when no path was found.
    pub path: Vec<Cell>,
    /// Unique cells in expansion order.
    pub explored: Vec<Cell>,
    /// Sum of entry costs along the path; `None` when no path was found.
    pub cost: Option<u64>,
    pub outcome: Outcome,
}

impl PathResult {
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn heuristic_name(&self) -> Option<&'static str> {
        self.heuristic.map(Heuristic::name)
    }

    /// `algorithm` or `algorithm + heuristic`.
    pub fn label(&self) -> String {
        match self.heuristic {
            Some(heuristic) => format!("{} + {}", self.algorithm, heuristic),
            None => self.algorithm.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of moves along the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    pub fn explored_set(&self) -> FxHashSet<Cell> {
        self.explored.iter().copied().collect()
    }
}

/// Executes searches against one grid.
#[derive(Debug, Clone, Copy)]
pub struct Runner<'g> {
    grid: &'g GridModel,
    step_limit: Option<usize>,
}

impl<'g> Runner<'g> {
    pub fn new(grid: &'g GridModel) -> Self {
        Runner {
            grid,
            step_limit: None,
        }
    }

    /// Aborts any search after `limit` cell expansions.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn grid(&self) -> &'g GridModel {
        self.grid
    }

    /// Runs `algorithm` from `start` to `goal`.
    ///
    /// An unreachable goal or an exhausted step budget is reported through
    /// [`PathResult::outcome`]; only bad input is an error. A heuristic given
    /// to an uninformed algorithm is recorded in the result and otherwise
    /// ignored.
    pub fn run(
        &self,
        start: Cell,
        goal: Cell,
        algorithm: Algorithm,
        heuristic: Option<Heuristic>,
    ) -> Result<PathResult> {
        self.grid.checked_index(start)?;
        self.grid.checked_index(goal)?;
        if algorithm.requires_heuristic() && heuristic.is_none() {
            return Err(MazeError::MissingHeuristic {
                algorithm: algorithm.name(),
            });
        }

        if start == goal {
            return Ok(PathResult {
                algorithm,
                heuristic,
                path: vec![start],
                explored: vec![start],
                cost: Some(0),
                outcome: Outcome::Found,
            });
        }

        let mut budget = StepBudget::new(self.step_limit);
        let search = algorithm
            .strategy()
            .search(self.grid, start, goal, heuristic, &mut budget);
        let cost = (search.outcome == Outcome::Found).then(|| self.path_cost(&search.path));

        let result = PathResult {
            algorithm,
            heuristic,
            path: search.path,
            explored: search.explored,
            cost,
            outcome: search.outcome,
        };
        debug!(
            "{} {} -> {}: {:?}, cost {:?}, {} explored in {} steps",
            result.label(),
            start,
            goal,
            result.outcome,
            result.cost,
            result.explored.len(),
            budget.used()
        );
        Ok(result)
    }

    /// Same as [`Runner::run`] with registry names.
    pub fn run_named(
        &self,
        start: Cell,
        goal: Cell,
        algorithm: &str,
        heuristic: Option<&str>,
    ) -> Result<PathResult> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        let heuristic = heuristic.map(str::parse::<Heuristic>).transpose()?;
        self.run(start, goal, algorithm, heuristic)
    }

    /// Accumulated in `u64` and saturating, the same way the frontier sums costs.
    fn path_cost(&self, path: &[Cell]) -> u64 {
        path.iter()
            .skip(1)
            .fold(0u64, |total, &cell| total.saturating_add(u64::from(self.grid.entry_cost(cell))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn heuristic_for(algorithm: Algorithm) -> Option<Heuristic> {
        algorithm.requires_heuristic().then_some(Heuristic::Manhattan)
    }

    #[test]
    fn start_equal_to_goal_skips_search() {
        let grid = GridModel::closed(3, 3).unwrap();
        let runner = Runner::new(&grid);
        let cell = Cell::new(1, 1);
        for algorithm in Algorithm::ALL {
            let result = runner.run(cell, cell, algorithm, heuristic_for(algorithm)).unwrap();
            assert_eq!(result.path, vec![cell]);
            assert_eq!(result.cost, Some(0));
            assert_eq!(result.hops(), Some(0));
            assert!(result.is_found());
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let grid = GridModel::open_field(4, 2).unwrap();
        let runner = Runner::new(&grid);
        let outside = Cell::new(2, 0);
        let err = runner
            .run(Cell::new(0, 0), outside, Algorithm::BreadthFirst, None)
            .unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                cell: outside,
                width: 4,
                height: 2
            }
        );
        assert!(runner
            .run(Cell::new(0, 4), Cell::new(0, 0), Algorithm::Dijkstra, None)
            .is_err());
    }

    #[test]
    fn informed_searches_demand_a_heuristic() {
        let grid = GridModel::open_field(3, 3).unwrap();
        let runner = Runner::new(&grid);
        let err = runner
            .run(Cell::new(0, 0), Cell::new(2, 2), Algorithm::AStar, None)
            .unwrap_err();
        assert_eq!(err, MazeError::MissingHeuristic { algorithm: "a_star" });
    }

    #[test]
    fn unreachable_goal_is_data_not_error() {
        let mut grid = GridModel::open_field(3, 3).unwrap();
        let goal = Cell::new(2, 2);
        grid.isolate(goal).unwrap();
        let runner = Runner::new(&grid);
        for algorithm in Algorithm::ALL {
            let result = runner
                .run(Cell::new(0, 0), goal, algorithm, heuristic_for(algorithm))
                .unwrap();
            assert_eq!(result.outcome, Outcome::Unreachable, "{}", result.label());
            assert!(result.path.is_empty());
            assert_eq!(result.cost, None);
            assert_eq!(result.hops(), None);
            // Every cell but the isolated one gets expanded.
            assert_eq!(result.explored.len(), 8);
        }
    }

    #[test]
    fn step_limit_aborts_search() {
        let grid = GridModel::open_field(10, 10).unwrap();
        let runner = Runner::new(&grid).with_step_limit(5);
        for algorithm in Algorithm::ALL {
            let result = runner
                .run(Cell::new(0, 0), Cell::new(9, 9), algorithm, heuristic_for(algorithm))
                .unwrap();
            assert_eq!(result.outcome, Outcome::StepLimit { limit: 5 });
            assert!(result.path.is_empty());
            assert_eq!(result.explored.len(), 5);
        }
    }

    #[test]
    fn weighted_cells_steer_cost_aware_searches() {
        // 2x2 ring: the southern route enters an expensive cell.
        let mut grid = GridModel::open_field(2, 2).unwrap();
        grid.set_cost(Cell::new(1, 0), 10).unwrap();
        let runner = Runner::new(&grid);
        let (start, goal) = (Cell::new(0, 0), Cell::new(1, 1));

        let dijkstra = runner.run(start, goal, Algorithm::Dijkstra, None).unwrap();
        assert_eq!(dijkstra.path, vec![start, Cell::new(0, 1), goal]);
        assert_eq!(dijkstra.cost, Some(2));

        let a_star = runner
            .run(start, goal, Algorithm::AStar, Some(Heuristic::Manhattan))
            .unwrap();
        assert_eq!(a_star.path, dijkstra.path);
        assert_eq!(a_star.cost, Some(2));

        // BFS counts hops only and discovers the goal through the south first.
        let bfs = runner.run(start, goal, Algorithm::BreadthFirst, None).unwrap();
        assert_eq!(bfs.path, vec![start, Cell::new(1, 0), goal]);
        assert_eq!(bfs.cost, Some(11));
    }

    #[test]
    fn maximal_entry_costs_do_not_overflow() {
        let mut grid = GridModel::open_field(3, 1).unwrap();
        grid.set_cost(Cell::new(0, 1), u32::MAX).unwrap();
        grid.set_cost(Cell::new(0, 2), u32::MAX).unwrap();
        let runner = Runner::new(&grid);
        let (start, goal) = (Cell::new(0, 0), Cell::new(0, 2));
        let expected = Some(2 * u64::from(u32::MAX));

        for algorithm in Algorithm::ALL {
            let result = runner.run(start, goal, algorithm, heuristic_for(algorithm)).unwrap();
            assert_eq!(result.cost, expected, "{}", result.label());
        }
        assert_eq!(grid.optimal_cost(start, goal).unwrap(), expected);
        assert_eq!(grid.remaining_costs_to(goal).unwrap()[&start], 2 * u64::from(u32::MAX));
    }

    #[test]
    fn depth_first_follows_first_open_direction() {
        // Straight corridor going south from (0,0), with a side cell east of (0,0).
        let mut grid = GridModel::closed(2, 3).unwrap();
        grid.open_passage(Cell::new(0, 0), Direction::East).unwrap();
        grid.open_passage(Cell::new(0, 0), Direction::South).unwrap();
        grid.open_passage(Cell::new(1, 0), Direction::South).unwrap();
        let result = Runner::new(&grid)
            .run(Cell::new(0, 0), Cell::new(0, 1), Algorithm::DepthFirst, None)
            .unwrap();
        // South comes before east, so the whole corridor is explored first.
        assert_eq!(
            result.explored,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0), Cell::new(0, 1)]
        );
        assert_eq!(result.path, vec![Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn named_runs_resolve_the_registry() {
        let grid = GridModel::open_field(3, 3).unwrap();
        let runner = Runner::new(&grid);
        let result = runner
            .run_named(Cell::new(0, 0), Cell::new(2, 2), "a_star", Some("euclidean"))
            .unwrap();
        assert_eq!(result.label(), "a_star + euclidean");
        assert_eq!(result.cost, Some(4));
        assert!(matches!(
            runner.run_named(Cell::new(0, 0), Cell::new(2, 2), "a_star", Some("nope")),
            Err(MazeError::UnknownHeuristic(_))
        ));
        assert!(matches!(
            runner.run_named(Cell::new(0, 0), Cell::new(2, 2), "teleport", None),
            Err(MazeError::UnknownAlgorithm(_))
        ));
    }
}
