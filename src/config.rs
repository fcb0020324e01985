use std::fs;
use std::path::{Path, PathBuf};

use cgmath::{Deg, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, FOV_MAX_DEG, FOV_MIN_DEG};
use crate::error::{Error, Result};
use crate::scene::ScatterConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text)?;
        cfg.camera.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let cam = Camera::default();
        Self {
            position: cam.position.into(),
            target: cam.target.into(),
            up: cam.up.into(),
            fov_deg: cam.fov_y.0,
            near: cam.near,
            far: cam.far,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        if !(FOV_MIN_DEG..=FOV_MAX_DEG).contains(&self.fov_deg) {
            return Err(Error::InvalidCamera(format!(
                "fov_deg {} outside [{}, {}]",
                self.fov_deg, FOV_MIN_DEG, FOV_MAX_DEG
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::InvalidCamera(format!("need 0 < near < far, got near={} far={}", self.near, self.far)));
        }
        if self.position == self.target {
            return Err(Error::InvalidCamera("position and target coincide".to_string()));
        }
        if self.up == [0.0, 0.0, 0.0] {
            return Err(Error::InvalidCamera("up vector is zero".to_string()));
        }
        Ok(())
    }

    pub fn to_camera(&self) -> Camera {
        Camera {
            position: Point3::from(self.position),
            target: Point3::from(self.target),
            up: Vector3::from(self.up),
            fov_y: Deg(self.fov_deg),
            near: self.near,
            far: self.far,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(flatten)]
    pub scatter: ScatterConfig,
    /// Read the layout from this file instead of scattering.
    #[serde(default)]
    pub load_from: Option<PathBuf>,
    /// Write the layout here once it is built.
    #[serde(default)]
    pub save_to: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub frames: u64,
    pub orbit_deg_per_frame: f32,
    /// Every this many frames the fov is stepped; 0 disables stepping.
    pub fov_step_every: u64,
    pub report_interval_secs: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            orbit_deg_per_frame: 0.6,
            fov_step_every: 60,
            report_interval_secs: 1.0,
        }
    }
}
