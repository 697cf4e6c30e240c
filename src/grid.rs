use crate::error::{MazeError, Result};
use pathfinding::directed::bfs::bfs_reach;
use pathfinding::directed::dijkstra::dijkstra_all;
use pathfinding::prelude::astar;
use pathfinding::undirected::connected_components::connected_components;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid position. `row` runs over `[0, height)`, `col` over `[0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The adjacent position in `direction`, or `None` when it would go below zero.
    /// The upper bound is not checked here.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (d_row, d_col) = direction.offset();
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = MazeError;

    /// Parses `row,col`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| MazeError::config("cell", format!("expected 'row,col', got '{s}'")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| MazeError::config("cell", format!("'{s}': {e}")))
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbor enumeration order used by every search.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// `(row, col)` delta.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// The maze: a `width x height` array of cells, each carrying a bitset of
/// open directions and the cost of stepping into it.
///
/// Walls are always symmetric and the outer boundary is always closed.
/// Searches only ever borrow the grid, so one instance can back any number
/// of concurrent runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridModel {
    width: usize,
    height: usize,
    open: Vec<u8>,
    costs: Vec<u32>,
}

impl GridModel {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 24;

    /// A fully walled grid with unit entry costs.
    pub fn closed(width: usize, height: usize) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(GridModel {
            width,
            height,
            open: vec![0; len],
            costs: vec![1; len],
        })
    }

    /// `width * height`, or a `Config` error when either side is zero or the
    /// product exceeds [`GridModel::MAX_CELLS`].
    pub fn checked_len(width: usize, height: usize) -> Result<usize> {
        if width == 0 {
            return Err(MazeError::config("width", "must be at least 1"));
        }
        if height == 0 {
            return Err(MazeError::config("height", "must be at least 1"));
        }
        width
            .checked_mul(height)
            .filter(|&len| len <= Self::MAX_CELLS)
            .ok_or_else(|| {
                MazeError::config(
                    "width",
                    format!(
                        "a {width}x{height} grid exceeds {} cells",
                        Self::MAX_CELLS
                    ),
                )
            })
    }

    /// A grid with every interior wall open.
    pub fn open_field(width: usize, height: usize) -> Result<Self> {
        let mut grid = Self::closed(width, height)?;
        for cell in (0..height).flat_map(|row| (0..width).map(move |col| Cell::new(row, col))) {
            for direction in [Direction::South, Direction::East] {
                if grid.step_within(cell, direction).is_some() {
                    grid.open_passage(cell, direction)?;
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    pub fn is_open(&self, cell: Cell, direction: Direction) -> Result<bool> {
        let index = self.checked_index(cell)?;
        Ok(self.open[index] & direction.bit() != 0)
    }

    /// Cells reachable from `cell` through one open wall, in `Direction::ALL` order.
    pub fn neighbors(&self, cell: Cell) -> Result<Vec<Cell>> {
        self.checked_index(cell)?;
        Ok(self.open_neighbors(cell).collect())
    }

    /// Cost of stepping into `cell`.
    pub fn cost(&self, cell: Cell) -> Result<u32> {
        let index = self.checked_index(cell)?;
        Ok(self.costs[index])
    }

    /// Opens the wall between `cell` and its neighbor in `direction`, on both sides.
    pub fn open_passage(&mut self, cell: Cell, direction: Direction) -> Result<()> {
        let from = self.checked_index(cell)?;
        let next = self.step_within(cell, direction).ok_or_else(|| {
            MazeError::config(
                "passage",
                format!("the {direction} wall of {cell} is on the outer boundary"),
            )
        })?;
        let to = self.index(next);
        self.open[from] |= direction.bit();
        self.open[to] |= direction.opposite().bit();
        Ok(())
    }

    /// Closes every wall around `cell`, cutting it off from the rest of the maze.
    pub fn isolate(&mut self, cell: Cell) -> Result<()> {
        let from = self.checked_index(cell)?;
        for direction in Direction::ALL {
            if let Some(next) = self.step_within(cell, direction) {
                let to = self.index(next);
                self.open[to] &= !direction.opposite().bit();
            }
        }
        self.open[from] = 0;
        Ok(())
    }

    pub fn set_cost(&mut self, cell: Cell, cost: u32) -> Result<()> {
        let index = self.checked_index(cell)?;
        if cost == 0 {
            return Err(MazeError::config(
                "cost",
                format!("entry cost of {cell} must be at least 1"),
            ));
        }
        self.costs[index] = cost;
        Ok(())
    }

    /// Every cell reachable from `cell`, in breadth-first order.
    pub fn reachable_from(&self, cell: Cell) -> Result<Vec<Cell>> {
        self.checked_index(cell)?;
        Ok(bfs_reach(cell, |c| self.open_neighbors(*c).collect::<Vec<_>>()).collect())
    }

    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }

    pub fn component_count(&self) -> usize {
        let starts: Vec<Cell> = self.cells().collect();
        connected_components(&starts, |c| self.open_neighbors(*c).collect::<Vec<_>>()).len()
    }

    /// Reference lowest cost from `start` to `goal`, `None` when unreachable.
    pub fn optimal_cost(&self, start: Cell, goal: Cell) -> Result<Option<u64>> {
        self.checked_index(start)?;
        self.checked_index(goal)?;
        let result = astar(
            &start,
            |c| {
                self.open_neighbors(*c)
                    .map(|n| (n, u64::from(self.entry_cost(n))))
                    .collect::<Vec<_>>()
            },
            |c| c.manhattan(&goal) as u64,
            |c| *c == goal,
        );
        Ok(result.map(|(_, cost)| cost))
    }

    /// Exact cost of reaching `goal` from every cell that can reach it.
    pub fn remaining_costs_to(&self, goal: Cell) -> Result<FxHashMap<Cell, u64>> {
        self.checked_index(goal)?;
        // Walk backwards from the goal: the reversed edge v <- u costs entry_cost(u).
        let parents = dijkstra_all(&goal, |u| {
            let cost = u64::from(self.entry_cost(*u));
            self.open_neighbors(*u)
                .map(|v| (v, cost))
                .collect::<Vec<_>>()
        });
        let mut costs: FxHashMap<Cell, u64> =
            parents.into_iter().map(|(cell, (_, cost))| (cell, cost)).collect();
        costs.insert(goal, 0);
        Ok(costs)
    }

    /// ASCII picture of the maze with an optional search overlay.
    pub fn render(&self, overlay: &Overlay<'_>) -> String {
        let on_path: FxHashSet<Cell> = overlay.path.iter().copied().collect();
        let links: FxHashSet<(Cell, Cell)> = overlay
            .path
            .windows(2)
            .flat_map(|step| [(step[0], step[1]), (step[1], step[0])])
            .collect();
        let explored: FxHashSet<Cell> = overlay.explored.iter().copied().collect();
        let mut canvas = vec![vec!['#'; self.width * 2 + 1]; self.height * 2 + 1];

        for cell in self.cells() {
            let (y, x) = (cell.row * 2 + 1, cell.col * 2 + 1);
            canvas[y][x] = overlay.glyph(cell, &on_path, &explored);
            for direction in [Direction::South, Direction::East] {
                if self.open[self.index(cell)] & direction.bit() == 0 {
                    continue;
                }
                let (dy, dx) = direction.offset();
                let (wy, wx) = (y.wrapping_add_signed(dy), x.wrapping_add_signed(dx));
                let path_link = self
                    .step_within(cell, direction)
                    .is_some_and(|next| links.contains(&(cell, next)));
                canvas[wy][wx] = if path_link { '*' } else { ' ' };
            }
        }

        let mut out = String::from("Legend: S=Start, G=Goal, *=Path, .=Explored, #=Wall\n");
        for line in canvas {
            out.extend(line);
            out.push('\n');
        }
        out
    }

    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    pub(crate) fn checked_index(&self, cell: Cell) -> Result<usize> {
        if self.in_bounds(cell) {
            Ok(self.index(cell))
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub(crate) fn step_within(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|next| self.in_bounds(*next))
    }

    /// Open neighbors of an in-bounds cell.
    pub(crate) fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let mask = self.open[self.index(cell)];
        Direction::ALL
            .into_iter()
            .filter(move |d| mask & d.bit() != 0)
            .filter_map(move |d| self.step_within(cell, d))
    }

    pub(crate) fn entry_cost(&self, cell: Cell) -> u32 {
        self.costs[self.index(cell)]
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Overlay::default()))
    }
}

/// What to draw on top of the maze in [`GridModel::render`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Overlay<'a> {
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub path: &'a [Cell],
    pub explored: &'a [Cell],
}

impl Overlay<'_> {
    fn glyph(&self, cell: Cell, on_path: &FxHashSet<Cell>, explored: &FxHashSet<Cell>) -> char {
        if Some(cell) == self.start {
            'S'
        } else if Some(cell) == self.goal {
            'G'
        } else if on_path.contains(&cell) {
            '*'
        } else if explored.contains(&cell) {
            '.'
        } else {
            ' '
        }
    }
}
