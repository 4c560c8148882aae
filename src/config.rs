use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::geometry::ShapeKind;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Viewer settings; every field falls back to the built-in scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 4],
    pub projection: ProjectionConfig,
    pub instances: Vec<InstanceConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Polyhedra".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            clear_color: [0.1, 0.1, 0.1, 1.0],
            projection: ProjectionConfig::default(),
            instances: default_instances(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 1.0,
            far: 10000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub shape: ShapeKind,
    pub translation: [f32; 3],
    pub axis: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oscillate: Option<OscillationConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillationConfig {
    pub bound: f32,
    pub speed: f32,
}

impl Default for OscillationConfig {
    fn default() -> Self {
        Self {
            bound: 4.0,
            speed: 15.0,
        }
    }
}

fn default_instances() -> Vec<InstanceConfig> {
    vec![
        InstanceConfig {
            shape: ShapeKind::Pyramid,
            translation: [-9.0, -4.0, -25.0],
            axis: [0.1, 1.0, 0.2],
            oscillate: None,
        },
        InstanceConfig {
            shape: ShapeKind::Octahedron,
            translation: [0.0, 0.0, -12.0],
            axis: [0.0, 1.0, 0.0],
            oscillate: Some(OscillationConfig::default()),
        },
        InstanceConfig {
            shape: ShapeKind::Dodecahedron,
            translation: [5.0, -3.0, -20.0],
            axis: [-0.4, 1.0, 0.1],
            oscillate: None,
        },
    ]
}

impl ViewerConfig {
    /// Read a JSON scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!(
            "loaded scene {} ({} instances)",
            path.display(),
            config.instances.len()
        );
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewerError::Config(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }

        let p = &self.projection;
        if !(p.fov_y_degrees > 0.0 && p.fov_y_degrees < 180.0) {
            return Err(ViewerError::Config(format!(
                "field of view {} must be between 0 and 180 degrees",
                p.fov_y_degrees
            )));
        }
        if !(p.near > 0.0 && p.far > p.near) {
            return Err(ViewerError::Config(format!(
                "clip planes near={} far={} must satisfy 0 < near < far",
                p.near, p.far
            )));
        }

        for (index, instance) in self.instances.iter().enumerate() {
            if let Some(oscillate) = &instance.oscillate {
                oscillate.validate().map_err(|reason| {
                    ViewerError::Config(format!(
                        "instance {} ({}): {}",
                        index, instance.shape, reason
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl OscillationConfig {
    /// Both values must be finite and positive or the drift never reverses
    fn validate(&self) -> std::result::Result<(), String> {
        if !(self.bound.is_finite() && self.bound > 0.0) {
            return Err(format!("oscillation bound {} must be positive", self.bound));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(format!("oscillation speed {} must be positive", self.speed));
        }
        Ok(())
    }
}
