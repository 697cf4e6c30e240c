use crate::algorithms::Algorithm;
use crate::error::Result;
use crate::grid::{Cell, GridModel};
use crate::heuristics::Heuristic;
use crate::runner::{PathResult, Runner};
use log::info;
use rayon::prelude::*;

/// One entry of a comparison: an algorithm and the heuristic it runs with.
pub type Pair = (Algorithm, Option<Heuristic>);

/// Every algorithm once, informed ones paired with Manhattan distance.
pub fn default_pairs() -> Vec<Pair> {
    Algorithm::ALL
        .into_iter()
        .map(|a| (a, a.requires_heuristic().then_some(Heuristic::Manhattan)))
        .collect()
}

/// Parses `algorithm` or `algorithm:heuristic`.
pub fn parse_pair(text: &str) -> Result<Pair> {
    match text.split_once(':') {
        Some((algorithm, heuristic)) => Ok((
            algorithm.parse::<Algorithm>()?,
            Some(heuristic.parse::<Heuristic>()?),
        )),
        None => Ok((text.parse::<Algorithm>()?, None)),
    }
}

/// Resolves `(algorithm_name, heuristic_name)` pairs against the registries.
pub fn resolve_pairs(names: &[(&str, Option<&str>)]) -> Result<Vec<Pair>> {
    names
        .iter()
        .map(|&(algorithm, heuristic)| {
            let algorithm = algorithm.parse::<Algorithm>()?;
            let heuristic = heuristic.map(str::parse::<Heuristic>).transpose()?;
            Ok((algorithm, heuristic))
        })
        .collect()
}

/// Runs every pair against the same maze, one result per pair in input order.
///
/// Fails fast on the first invalid pair or endpoint; an unreachable goal is
/// still a result.
pub fn compare(grid: &GridModel, start: Cell, goal: Cell, pairs: &[Pair]) -> Result<Vec<PathResult>> {
    compare_with(&Runner::new(grid), start, goal, pairs)
}

/// [`compare`] with one rayon task per pair. Results keep input order.
pub fn compare_parallel(
    grid: &GridModel,
    start: Cell,
    goal: Cell,
    pairs: &[Pair],
) -> Result<Vec<PathResult>> {
    compare_parallel_with(&Runner::new(grid), start, goal, pairs)
}

pub fn compare_with(runner: &Runner<'_>, start: Cell, goal: Cell, pairs: &[Pair]) -> Result<Vec<PathResult>> {
    check_endpoints(runner, start, goal)?;
    info!("Comparing {} searches from {} to {}", pairs.len(), start, goal);
    pairs
        .iter()
        .map(|&(algorithm, heuristic)| runner.run(start, goal, algorithm, heuristic))
        .collect()
}

pub fn compare_parallel_with(
    runner: &Runner<'_>,
    start: Cell,
    goal: Cell,
    pairs: &[Pair],
) -> Result<Vec<PathResult>> {
    check_endpoints(runner, start, goal)?;
    info!(
        "Comparing {} searches from {} to {} in parallel",
        pairs.len(),
        start,
        goal
    );
    pairs
        .par_iter()
        .map(|&(algorithm, heuristic)| runner.run(start, goal, algorithm, heuristic))
        .collect()
}

/// Endpoints are checked up front so an empty comparison still rejects them.
fn check_endpoints(runner: &Runner<'_>, start: Cell, goal: Cell) -> Result<()> {
    runner.grid().checked_index(start)?;
    runner.grid().checked_index(goal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;
    use crate::maze::{generate, MazeConfig};

    #[test]
    fn pairs_parse_with_and_without_heuristic() {
        assert_eq!(parse_pair("bfs").unwrap(), (Algorithm::BreadthFirst, None));
        assert_eq!(
            parse_pair("a_star:chebyshev").unwrap(),
            (Algorithm::AStar, Some(Heuristic::Chebyshev))
        );
        assert!(matches!(parse_pair("a_star:"), Err(MazeError::UnknownHeuristic(_))));
        assert!(matches!(parse_pair("jump_point"), Err(MazeError::UnknownAlgorithm(_))));

        let resolved = resolve_pairs(&[("dijkstra", None), ("greedy_best_first", Some("zero"))]).unwrap();
        assert_eq!(
            resolved,
            vec![
                (Algorithm::Dijkstra, None),
                (Algorithm::GreedyBestFirst, Some(Heuristic::Zero))
            ]
        );
    }

    #[test]
    fn default_pairs_cover_the_registry() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), Algorithm::ALL.len());
        for (algorithm, heuristic) in pairs {
            assert_eq!(heuristic.is_some(), algorithm.requires_heuristic());
        }
    }

    #[test]
    fn results_keep_input_order() {
        let grid = generate(&MazeConfig::new(5, 12, 12)).unwrap();
        let pairs = vec![
            (Algorithm::GreedyBestFirst, Some(Heuristic::Euclidean)),
            (Algorithm::BreadthFirst, None),
            (Algorithm::AStar, Some(Heuristic::Manhattan)),
            (Algorithm::DepthFirst, None),
        ];
        let (start, goal) = (Cell::new(0, 0), Cell::new(11, 11));
        let sequential = compare(&grid, start, goal, &pairs).unwrap();
        let parallel = compare_parallel(&grid, start, goal, &pairs).unwrap();
        let order: Vec<Pair> = sequential.iter().map(|r| (r.algorithm, r.heuristic)).collect();
        assert_eq!(order, pairs);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_comparison_yields_no_results() {
        let grid = GridModel::open_field(2, 2).unwrap();
        assert!(compare(&grid, Cell::new(0, 0), Cell::new(1, 1), &[])
            .unwrap()
            .is_empty());
        assert!(compare_parallel(&grid, Cell::new(0, 0), Cell::new(1, 1), &[])
            .unwrap()
            .is_empty());
        assert!(matches!(
            compare(&grid, Cell::new(0, 0), Cell::new(3, 1), &[]),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn bad_endpoint_fails_the_whole_comparison() {
        let grid = GridModel::open_field(2, 2).unwrap();
        let err = compare(&grid, Cell::new(0, 0), Cell::new(2, 2), &default_pairs()).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds { .. }));
    }
}
