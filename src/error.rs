use thiserror::Error;

/// Top-level error type for the linedraw curve pipeline.
#[derive(Debug, Error)]
pub enum LinedrawError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// Errors caused by malformed caller input.
///
/// These are reported before any computation is attempted.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{first} and {second} must have the same length ({first_len} != {second_len})")]
    LengthMismatch {
        first: &'static str,
        second: &'static str,
        first_len: usize,
        second_len: usize,
    },

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("maximum distance must be positive and finite, got {0}")]
    NonPositiveMaxDistance(f64),

    #[error("degree must be at least 1, got {0}")]
    InvalidDegree(usize),

    #[error("{parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("reference point (lat_ref, lon_ref) must be specified")]
    ReferenceUnset,

    #[error("start and end point must be the same for a closed curve")]
    ClosedCurveMismatch,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors raised when a computation cannot finish within its work bound.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error(
        "adaptive sampling did not converge after {iterations} iterations \
         ({samples} samples, max gap {max_gap} > {max_distance})"
    )]
    SamplingLimit {
        iterations: usize,
        samples: usize,
        max_gap: f64,
        max_distance: f64,
    },
}

/// Errors from the project publish/fetch collaborator.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("project document exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to read project document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse project document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid project document: {0}")]
    Invalid(String),

    #[error("project not found: {0}")]
    NotFound(String),

    #[error("random source unavailable: {0}")]
    Random(String),
}

/// Convenience type alias for results using [`LinedrawError`].
pub type Result<T> = std::result::Result<T, LinedrawError>;
