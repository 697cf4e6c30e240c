use crate::algorithms::Outcome;
use crate::runner::PathResult;
use std::fmt;

/// Derived numbers for one run, measured against the maze's optimal cost.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub label: String,
    pub outcome: Outcome,
    pub path_length: Option<usize>,
    pub cost: Option<u64>,
    pub optimal_cost: Option<u64>,
    pub explored: usize,
    pub total_cells: usize,
    /// `cost / optimal_cost`; 1.0 for an optimal path, 0.0 without a path.
    pub route_efficiency: f64,
}

impl Statistics {
    pub fn new(result: &PathResult, optimal_cost: Option<u64>, total_cells: usize) -> Self {
        let mut stats = Statistics {
            label: result.label(),
            outcome: result.outcome,
            path_length: result.hops(),
            cost: result.cost,
            optimal_cost,
            explored: result.explored.len(),
            total_cells,
            route_efficiency: 0.0,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.cost, self.optimal_cost) {
            (Some(cost), Some(optimal)) if optimal > 0 => cost as f64 / optimal as f64,
            (Some(0), Some(0)) => 1.0,
            _ => 0.0,
        };
    }

    pub fn is_optimal(&self) -> bool {
        self.cost.is_some() && self.cost == self.optimal_cost
    }

    /// Share of the maze the search expanded, in percent.
    pub fn explored_percentage(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        self.explored as f64 / self.total_cells as f64 * 100.0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search: {}", self.label)?;
        writeln!(f, "Outcome: {}", outcome_text(self.outcome))?;
        if let (Some(length), Some(cost)) = (self.path_length, self.cost) {
            writeln!(f, "Path Length: {}", length)?;
            writeln!(f, "Path Cost: {}", cost)?;
        }
        if let Some(optimal) = self.optimal_cost {
            writeln!(f, "Optimal Cost: {}", optimal)?;
        }
        writeln!(
            f,
            "Explored: {} of {} cells ({:.1}%)",
            self.explored,
            self.total_cells,
            self.explored_percentage()
        )?;
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        }
        Ok(())
    }
}

fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Found => "found".to_string(),
        Outcome::Unreachable => "unreachable".to_string(),
        Outcome::StepLimit { limit } => format!("aborted after {limit} steps"),
    }
}

/// Side-by-side table of every run in a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    pub rows: Vec<Statistics>,
}

impl ComparisonTable {
    pub fn new(results: &[PathResult], optimal_cost: Option<u64>, total_cells: usize) -> Self {
        ComparisonTable {
            rows: results
                .iter()
                .map(|r| Statistics::new(r, optimal_cost, total_cells))
                .collect(),
        }
    }

    /// Cheapest successful run; the first one listed wins ties.
    pub fn best_by_cost(&self) -> Option<&Statistics> {
        self.successful().min_by_key(|s| s.cost)
    }

    /// Successful run that expanded the fewest cells; the first one listed wins ties.
    pub fn fewest_explored(&self) -> Option<&Statistics> {
        self.successful().min_by_key(|s| s.explored)
    }

    fn successful(&self) -> impl Iterator<Item = &Statistics> {
        self.rows.iter().filter(|s| s.cost.is_some())
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<32} {:<26} {:<8} {:<8} {:<10} {:<12}",
            "Search", "Outcome", "Hops", "Cost", "Explored", "Efficiency"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for row in &self.rows {
            let hops = row.path_length.map_or("-".to_string(), |h| h.to_string());
            let cost = row.cost.map_or("-".to_string(), |c| c.to_string());
            let marker = if row.is_optimal() { " ✓" } else { "" };
            writeln!(
                f,
                "{:<32} {:<26} {:<8} {:<8} {:<10} {:<12}",
                row.label,
                outcome_text(row.outcome),
                hops,
                cost,
                row.explored,
                format!("{:.3}{}", row.route_efficiency, marker)
            )?;
        }

        writeln!(f)?;
        match (self.best_by_cost(), self.fewest_explored()) {
            (Some(cheapest), Some(leanest)) => {
                writeln!(
                    f,
                    "Best by cost: {} ({})",
                    cheapest.label,
                    cheapest.cost.unwrap_or_default()
                )?;
                writeln!(
                    f,
                    "Fewest cells explored: {} ({}, {:.1}% of the maze)",
                    leanest.label,
                    leanest.explored,
                    leanest.explored_percentage()
                )?;
            }
            _ => writeln!(f, "No search reached the goal.")?,
        }
        Ok(())
    }
}
