use crate::grid::Cell;
use thiserror::Error;

/// Errors raised by maze generation and pathfinding.
///
/// An unreachable goal is not an error: it comes back as a `PathResult`
/// with an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid {parameter}: {reason}")]
    Config {
        parameter: &'static str,
        reason: String,
    },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("placed {placed} of {requested} rooms; room {} did not fit after {attempts} attempts", placed + 1)]
    RoomPlacement {
        requested: usize,
        placed: usize,
        attempts: usize,
    },

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown heuristic '{0}'")]
    UnknownHeuristic(String),

    #[error("algorithm '{algorithm}' requires a heuristic")]
    MissingHeuristic { algorithm: &'static str },
}

pub type Result<T> = std::result::Result<T, MazeError>;

impl MazeError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        MazeError::Config {
            parameter,
            reason: reason.into(),
        }
    }
}
