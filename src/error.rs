use thiserror::Error;

use crate::Cell;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Everything that can go wrong before a search starts. A search itself never fails: an
/// unreachable goal is reported as an empty path.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The environment text is malformed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("grid dimensions must be positive, got {rows} rows by {cols} columns")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("environment does not list any goal cell")]
    NoGoals,

    #[error("{role} cell {cell} lies outside the grid")]
    OutOfBounds { role: &'static str, cell: Cell },

    #[error("{role} cell {cell} is covered by a wall")]
    Blocked { role: &'static str, cell: Cell },

    #[error("unknown search method `{0}`")]
    UnknownAlgorithm(String),

    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),

    #[error("could not read environment: {0}")]
    Io(#[from] std::io::Error),
}

impl NavigationError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> NavigationError {
        NavigationError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NavigationError::Blocked {
            role: "goal",
            cell: Cell::new(3, 4),
        };
        assert_eq!(err.to_string(), "goal cell (3, 4) is covered by a wall");
        let err = NavigationError::parse(2, "expected 2 fields, found 3");
        assert_eq!(err.to_string(), "line 2: expected 2 fields, found 3");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NavigationError = io_err.into();
        assert!(matches!(err, NavigationError::Io(_)));
    }
}
