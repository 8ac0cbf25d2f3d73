use std::io::Read;

use serde::{Deserialize, Serialize};

use super::colormap::{is_hex_color, ColorMap};
use crate::error::{ProjectError, Result};

/// Default ceiling for a downloaded project document.
pub const DEFAULT_MAX_PROJECT_BYTES: usize = 1024 * 1024;

/// A shared drawing project: curves plus map display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Project {
    pub info: ProjectInfo,
    pub curves: Vec<ProjectCurve>,
    pub color_maps: Vec<ColorMap>,
    pub settings: ProjectSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatLonPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProjectCurve {
    pub name: String,
    pub control_points: Vec<LatLonPoint>,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMapSettings {
    pub center: LatLonPoint,
    pub zoom: u32,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProjectSettings {
    pub selected_color_map_index: usize,
    pub map: ProjectMapSettings,
}

impl LatLonPoint {
    fn validate(&self, context: &str) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(ProjectError::Invalid(format!(
                "{context}: ({}, {}) is not a valid latitude/longitude",
                self.lat, self.lon
            ))
            .into());
        }
        Ok(())
    }
}

impl Project {
    /// Checks value constraints the JSON structure alone does not express.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Invalid` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        for curve in &self.curves {
            for point in &curve.control_points {
                point.validate(&format!("curve '{}'", curve.name))?;
            }
        }
        for map in &self.color_maps {
            if let Some(bad) = map.items.iter().find(|i| !is_hex_color(&i.color)) {
                return Err(ProjectError::Invalid(format!(
                    "color map '{}': '{}' is not a #rrggbb color",
                    map.name, bad.color
                ))
                .into());
            }
        }
        self.settings.map.center.validate("map center")?;
        Ok(())
    }
}

/// Reads a project document, giving up as soon as more than `max_bytes`
/// have arrived, then parses and validates it.
///
/// # Errors
///
/// Returns `ProjectError::TooLarge`, `ProjectError::Io`,
/// `ProjectError::Parse` or `ProjectError::Invalid`.
pub fn read_project<R: Read>(reader: R, max_bytes: usize) -> Result<Project> {
    let mut body = Vec::new();
    // One byte past the ceiling is enough to detect an oversized body.
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    reader
        .take(limit)
        .read_to_end(&mut body)
        .map_err(ProjectError::from)?;
    if body.len() > max_bytes {
        return Err(ProjectError::TooLarge { limit: max_bytes }.into());
    }
    let project: Project = serde_json::from_slice(&body).map_err(ProjectError::from)?;
    project.validate()?;
    Ok(project)
}
