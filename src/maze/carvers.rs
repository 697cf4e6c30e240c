use crate::error::Result;
use crate::grid::{Cell, Direction, GridModel};
use pathfinding::undirected::kruskal::kruskal_indices;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Randomized depth-first backtracker.
///
/// Walks from `(0,0)`, knocking down the wall to a random unvisited neighbor
/// and backing up the stack when the current cell has none left.
pub(super) fn backtrack(grid: &mut GridModel, rng: &mut StdRng) -> Result<()> {
    let start = Cell::new(0, 0);
    let mut visited = vec![false; grid.len()];
    visited[grid.index(start)] = true;
    let mut stack = Vec::with_capacity(grid.len());
    stack.push(start);

    while let Some(&current) = stack.last() {
        let unvisited: Vec<(Direction, Cell)> = Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                grid.step_within(current, direction)
                    .filter(|next| !visited[grid.index(*next)])
                    .map(|next| (direction, next))
            })
            .collect();

        match unvisited.choose(rng) {
            Some(&(direction, next)) => {
                grid.open_passage(current, direction)?;
                visited[grid.index(next)] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Randomized Kruskal: every interior wall gets a random weight and the
/// minimum spanning tree over those weights decides which walls come down.
pub(super) fn kruskal(grid: &mut GridModel, rng: &mut StdRng) -> Result<()> {
    let mut edges = Vec::with_capacity(grid.len() * 2);
    for cell in grid.cells() {
        for direction in [Direction::South, Direction::East] {
            if let Some(next) = grid.step_within(cell, direction) {
                edges.push((grid.index(cell), grid.index(next), rng.gen::<u64>()));
            }
        }
    }

    let width = grid.width();
    let passages: Vec<(usize, usize)> = kruskal_indices(grid.len(), &edges)
        .map(|(from, to, _)| (from, to))
        .collect();
    for (from, to) in passages {
        let cell = Cell::new(from / width, from % width);
        let direction = if to == from + width {
            Direction::South
        } else {
            Direction::East
        };
        grid.open_passage(cell, direction)?;
    }
    Ok(())
}
