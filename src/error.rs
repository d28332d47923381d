use thiserror::Error;

/// Input contract violations detected while building a [`Grid`](crate::Grid)
/// or starting a search on it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Grid must contain at least one row and one column")]
    Empty,
    #[error("Grid row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid cost {cost} at [{x}, {y}]: costs must be finite and non-negative")]
    InvalidCost { x: usize, y: usize, cost: f64 },
    #[error("Start [{x}, {y}] is outside the grid")]
    StartOutOfBounds { x: i32, y: i32 },
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::InvalidOptions(err.to_string())
    }
}
