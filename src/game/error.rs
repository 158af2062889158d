use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationError {
    /// The grid cannot hold the initial snake body.
    InvalidGridSize { width: usize, height: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidGridSize { width, height } => {
                write!(
                    f,
                    "Grid {}x{} is too small for the initial snake",
                    width, height
                )
            }
        }
    }
}

impl Error for SimulationError {}
