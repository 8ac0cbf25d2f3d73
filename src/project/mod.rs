//! Project documents and the publish/fetch record store.
//!
//! Downloading documents is the caller's job; this module validates what
//! was downloaded and keeps `{url, timestamp}` records under random ids.

mod colormap;
mod schema;
mod store;

pub use colormap::{is_hex_color, ColorMap, ColorMapItem};
pub use schema::{
    read_project, LatLonPoint, Project, ProjectCurve, ProjectInfo, ProjectMapSettings,
    ProjectSettings, DEFAULT_MAX_PROJECT_BYTES,
};
pub use store::{
    generate_id, MemoryProjectStore, ProjectRecord, ProjectStore, Publisher, DEFAULT_ID_LENGTH,
};
