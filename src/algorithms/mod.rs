pub mod a_star;
mod best_first;
pub mod breadth_first;
pub mod common;
pub mod depth_first;
pub mod dijkstra;
pub mod greedy_best_first;

use crate::error::MazeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use common::{Outcome, PathfindingAlgorithm, Search, StepBudget};

/// The catalog of search strategies, keyed by a stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar,
    GreedyBestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "breadth_first",
            Algorithm::DepthFirst => "depth_first",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a_star",
            Algorithm::GreedyBestFirst => "greedy_best_first",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth-First Search",
            Algorithm::DepthFirst => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::GreedyBestFirst => "Greedy Best-First Search",
        }
    }

    pub fn requires_heuristic(self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::GreedyBestFirst)
    }

    /// Whether the returned path is lowest-cost. For BFS this holds only
    /// on unit-cost grids; for A* only with an admissible heuristic.
    pub fn guarantees_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::BreadthFirst | Algorithm::Dijkstra | Algorithm::AStar
        )
    }

    pub fn strategy(self) -> &'static dyn PathfindingAlgorithm {
        match self {
            Algorithm::BreadthFirst => &breadth_first::BreadthFirst,
            Algorithm::DepthFirst => &depth_first::DepthFirst,
            Algorithm::Dijkstra => &dijkstra::Dijkstra,
            Algorithm::AStar => &a_star::AStar,
            Algorithm::GreedyBestFirst => &greedy_best_first::GreedyBestFirst,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        let algorithm = match wanted.as_str() {
            "bfs" => Algorithm::BreadthFirst,
            "dfs" => Algorithm::DepthFirst,
            "astar" => Algorithm::AStar,
            "greedy" => Algorithm::GreedyBestFirst,
            other => Algorithm::ALL
                .into_iter()
                .find(|a| a.name() == other)
                .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))?,
        };
        Ok(algorithm)
    }
}
