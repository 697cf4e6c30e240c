//! Seeded maze generation.
//!
//! A maze is carved as a spanning tree over the whole grid, so every cell is
//! reachable from every other. Rooms are then cut into the tree; they only
//! ever open walls, which keeps the maze connected.
//!
//! Generation owns its random source: the same [`MazeConfig`] always yields
//! the same [`GridModel`], bit for bit.

mod carvers;
mod rooms;

use crate::error::{MazeError, Result};
use crate::grid::GridModel;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub use rooms::{Room, ROOM_PLACEMENT_ATTEMPTS};

/// Spanning-tree algorithm used to carve the corridors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Carver {
    /// Randomized depth-first backtracker starting at `(0,0)`. Long, winding corridors.
    #[default]
    Backtracker,
    /// Randomized Kruskal over every interior wall. Many short dead ends.
    Kruskal,
}

impl Carver {
    pub const ALL: [Carver; 2] = [Carver::Backtracker, Carver::Kruskal];

    pub fn name(self) -> &'static str {
        match self {
            Carver::Backtracker => "backtracker",
            Carver::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for Carver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Carver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Carver::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| MazeError::config("carver", format!("unknown carver '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub num_rooms: usize,
    /// Inclusive bounds for each room side. Ignored when `num_rooms` is 0.
    pub room_size_range: (usize, usize),
    #[serde(default)]
    pub carver: Carver,
}

impl MazeConfig {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        MazeConfig {
            seed,
            width,
            height,
            num_rooms: 0,
            room_size_range: (1, 1),
            carver: Carver::default(),
        }
    }

    pub fn with_rooms(mut self, num_rooms: usize, room_size_range: (usize, usize)) -> Self {
        self.num_rooms = num_rooms;
        self.room_size_range = room_size_range;
        self
    }

    pub fn with_carver(mut self, carver: Carver) -> Self {
        self.carver = carver;
        self
    }

    pub fn validate(&self) -> Result<()> {
        GridModel::checked_len(self.width, self.height)?;
        if self.num_rooms == 0 {
            return Ok(());
        }

        let (min, max) = self.room_size_range;
        let limit = ControlLimits::max_room_size(self.width, self.height);
        if min == 0 {
            return Err(MazeError::config(
                "room_size_range",
                "minimum room side must be at least 1",
            ));
        }
        if min > max {
            return Err(MazeError::config(
                "room_size_range",
                format!("minimum {min} is larger than maximum {max}"),
            ));
        }
        if max > limit {
            return Err(MazeError::config(
                "room_size_range",
                format!(
                    "maximum {max} exceeds {limit}, a quarter of the shorter side of a {}x{} maze",
                    self.width, self.height
                ),
            ));
        }
        Ok(())
    }
}

/// Parameter ranges offered by the interactive controls.
pub struct ControlLimits;

impl ControlLimits {
    pub const SEED: RangeInclusive<u64> = 0..=10;
    pub const DIMENSION: RangeInclusive<u64> = 5..=25;
    pub const ROOMS: RangeInclusive<u64> = 0..=5;

    /// Largest room side allowed for a maze of the given size.
    pub fn max_room_size(width: usize, height: usize) -> usize {
        width.min(height) / 4
    }
}

/// Builds the maze described by `config`.
///
/// Fails with [`MazeError::Config`] for invalid parameters and with
/// [`MazeError::RoomPlacement`] when a room cannot be fitted without
/// overlapping another one. Excess rooms are never silently dropped.
pub fn generate(config: &MazeConfig) -> Result<GridModel> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut grid = GridModel::closed(config.width, config.height)?;

    match config.carver {
        Carver::Backtracker => carvers::backtrack(&mut grid, &mut rng)?,
        Carver::Kruskal => carvers::kruskal(&mut grid, &mut rng)?,
    }
    let rooms = rooms::place_rooms(&mut grid, config, &mut rng)?;

    debug!(
        "Generated {}x{} maze (seed {}, carver {}, {} rooms)",
        config.width,
        config.height,
        config.seed,
        config.carver.name(),
        rooms.len()
    );
    Ok(grid)
}
