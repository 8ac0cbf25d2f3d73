mod curvature;
mod length;
mod speed;

pub use curvature::Curvature;
pub use length::ArcLength;
pub use speed::{ClampPolicy, SpeedLimit, DEFAULT_MAX_CURVATURE, DEFAULT_MAX_SPEED};
