pub mod error;
pub mod geodesy;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod project;
pub mod tessellation;

pub use error::{LinedrawError, Result};
pub use pipeline::{ControlPoints, CurvePipeline, CurveRequest, CurveResponse, PipelineConfig};
