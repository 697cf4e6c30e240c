use crate::comparison::{default_pairs, parse_pair, Pair};
use crate::grid::{Cell, GridModel};
use crate::maze::{Carver, ControlLimits, MazeConfig};
use clap::Parser;

/// Generate a seeded maze and compare pathfinding algorithms on it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(ControlLimits::SEED))]
    pub seed: u64,

    #[arg(long, default_value_t = 11, value_parser = clap::value_parser!(u64).range(ControlLimits::DIMENSION))]
    pub width: u64,

    #[arg(long, default_value_t = 11, value_parser = clap::value_parser!(u64).range(ControlLimits::DIMENSION))]
    pub height: u64,

    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(ControlLimits::ROOMS))]
    pub num_rooms: u64,

    /// Smallest room side
    #[arg(long, default_value_t = 1)]
    pub room_min: usize,

    /// Largest room side, at most a quarter of the shorter maze side
    #[arg(long, default_value_t = 2)]
    pub room_max: usize,

    /// backtracker or kruskal
    #[arg(long, default_value = "backtracker")]
    pub carver: Carver,

    /// Start cell as row,col [default: 0,0]
    #[arg(long)]
    pub start: Option<Cell>,

    /// Goal cell as row,col [default: bottom-right corner]
    #[arg(long)]
    pub goal: Option<Cell>,

    /// algorithm[:heuristic], repeatable [default: every algorithm]
    #[arg(long = "pair", value_parser = parse_pair)]
    pub pairs: Vec<Pair>,

    /// Abort each search after this many cell expansions
    #[arg(long)]
    pub step_limit: Option<usize>,

    /// Run the searches concurrently
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Print the maze and results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Draw the maze with each search's overlay
    #[arg(long, default_value_t = false)]
    pub show_maze: bool,

    /// List the available algorithms and heuristics and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Config {
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig::new(self.seed, self.width as usize, self.height as usize)
            .with_rooms(self.num_rooms as usize, (self.room_min, self.room_max))
            .with_carver(self.carver)
    }

    pub fn endpoints(&self, grid: &GridModel) -> (Cell, Cell) {
        let start = self.start.unwrap_or(Cell::new(0, 0));
        let goal = self
            .goal
            .unwrap_or(Cell::new(grid.height() - 1, grid.width() - 1));
        (start, goal)
    }

    pub fn pairs(&self) -> Vec<Pair> {
        if self.pairs.is_empty() {
            default_pairs()
        } else {
            self.pairs.clone()
        }
    }
}
