use crate::error::MazeError;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance estimators for the informed searches.
///
/// Movement is 4-directional and every step costs at least 1, so an estimate
/// is admissible when it never exceeds the Manhattan distance. A* only
/// returns a lowest-cost path with an admissible heuristic; this is a
/// contract on the caller and is not checked while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Chebyshev,
    Zero,
    /// Twice the Manhattan distance. Overestimates, so A* may return a
    /// longer path with it.
    InflatedManhattan,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Zero,
        Heuristic::InflatedManhattan,
    ];

    pub fn estimate(self, cell: Cell, goal: Cell) -> f64 {
        let d_row = cell.row.abs_diff(goal.row) as f64;
        let d_col = cell.col.abs_diff(goal.col) as f64;
        match self {
            Heuristic::Manhattan => d_row + d_col,
            Heuristic::Euclidean => d_row.hypot(d_col),
            Heuristic::Chebyshev => d_row.max(d_col),
            Heuristic::Zero => 0.0,
            Heuristic::InflatedManhattan => 2.0 * (d_row + d_col),
        }
    }

    pub fn is_admissible(self) -> bool {
        !matches!(self, Heuristic::InflatedManhattan)
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Zero => "zero",
            Heuristic::InflatedManhattan => "inflated_manhattan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Chebyshev => "Chebyshev",
            Heuristic::Zero => "Zero",
            Heuristic::InflatedManhattan => "Inflated Manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == wanted)
            .ok_or_else(|| MazeError::UnknownHeuristic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates_match_their_metric() {
        let a = Cell::new(1, 1);
        let b = Cell::new(4, 5);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 4.0);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
        assert_eq!(Heuristic::InflatedManhattan.estimate(a, b), 14.0);
    }

    #[test]
    fn estimates_are_zero_at_the_goal() {
        let goal = Cell::new(2, 3);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.estimate(goal, goal), 0.0);
        }
    }

    #[test]
    fn admissible_ones_never_exceed_manhattan() {
        let goal = Cell::new(3, 3);
        for heuristic in Heuristic::ALL.into_iter().filter(|h| h.is_admissible()) {
            for row in 0..8 {
                for col in 0..8 {
                    let cell = Cell::new(row, col);
                    assert!(heuristic.estimate(cell, goal) <= cell.manhattan(&goal) as f64);
                }
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.name().parse::<Heuristic>().unwrap(), heuristic);
        }
        assert_eq!("Inflated-Manhattan".parse::<Heuristic>().unwrap(), Heuristic::InflatedManhattan);
        assert_eq!(
            "octile".parse::<Heuristic>(),
            Err(MazeError::UnknownHeuristic("octile".into()))
        );
    }
}
