//! Error type shared by request validation and the solver.

use std::fmt;

use thiserror::Error as ThisError;

/// Which part of a route request a place was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceRole {
    Start,
    Stop(usize),
    End,
}

impl fmt::Display for PlaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceRole::Start => write!(f, "start"),
            PlaceRole::Stop(index) => write!(f, "stop at index {index}"),
            PlaceRole::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("{role} 'id' is required")]
    MissingId { role: PlaceRole },
    #[error("{role} has a non-finite coordinate ({lat}, {lng})")]
    NonFiniteCoordinate { role: PlaceRole, lat: f64, lng: f64 },
    #[error("at least {min} stops are required, got {count}")]
    TooFewStops { count: usize, min: usize },
    #[error("{count} stops exceed the limit of {max}")]
    TooManyStops { count: usize, max: usize },
    #[error("end '{id}' must differ from start")]
    EndIsStart { id: String },
    #[error("stop '{id}' appears more than once")]
    DuplicateStop { id: String },
    #[error("at least one intermediate point is required between start and end")]
    NoIntermediates,
    #[error("{count} intermediate points exceed the exact solver capacity of {max}")]
    TooManyIntermediates { count: usize, max: usize },
    #[error("index {index} is out of range for a matrix of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("start and end must be different indices, both are {0}")]
    SameStartAndEnd(usize),
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    #[error("no complete path reaches the end point")]
    Unreachable,
    #[error("no candidate end points to evaluate")]
    NoCandidateEnds,
    #[error("road distance factor must be finite and positive, got {0}")]
    InvalidDistanceFactor(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }
}
