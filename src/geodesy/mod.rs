//! Conversion between ellipsoidal geographic coordinates and a local
//! tangent-plane frame.

mod ellipsoid;
mod frame;
mod path;

pub use ellipsoid::Ellipsoid;
pub use frame::{GeoPoint, LocalFrame, LocalPath};
pub use path::project_path;

pub(crate) use frame::check_range;
