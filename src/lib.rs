//! Seeded maze generation and side-by-side comparison of grid search
//! algorithms.
//!
//! [`generate`] builds a maze from a [`MazeConfig`]; [`compare`] runs a list
//! of (algorithm, heuristic) pairs on it and returns one [`PathResult`] per
//! pair, in order, with the path, the explored cells and the path cost.

pub mod algorithms;
pub mod comparison;
pub mod config;
pub mod error;
pub mod grid;
pub mod heuristics;
pub mod maze;
pub mod runner;
pub mod statistics;

pub use algorithms::{Algorithm, Outcome};
pub use comparison::{compare, compare_parallel, Pair};
pub use error::{MazeError, Result};
pub use grid::{Cell, Direction, GridModel};
pub use heuristics::Heuristic;
pub use maze::{generate, Carver, MazeConfig};
pub use runner::{PathResult, Runner};
