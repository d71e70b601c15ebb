use crate::models::StopIndex;

#[derive(thiserror::Error, Debug)]
pub enum FareError {
    #[error("route has {stops} stops but {distances} distances, expected {expected}")]
    StopCountMismatch {
        stops: usize,
        distances: usize,
        expected: usize,
    },
    #[error("route must contain at least one stop")]
    EmptyRoute,
    #[error("distance {index} is {value}, must be a finite non-negative number")]
    InvalidDistance { index: usize, value: f64 },
    #[error("stop index {index} out of bounds for route with {len} stops")]
    StopIndexOutOfBounds { index: StopIndex, len: usize },
    #[error("unknown passenger '{0}'")]
    UnknownPassenger(String),
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed parsing '{filepath}': {error}")]
    ParseError { filepath: String, error: String },
    #[error("failed serializing {what}: {error}")]
    SerializeError { what: String, error: String },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: ::config::ConfigError,
    },
}
