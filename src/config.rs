//! Application configuration: defaults reproduce the stock scene, a JSON file
//! may override any subset, and command-line flags override both.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::walk::{Easing, WalkMode};

/// Largest shadow map accepted from a config file or flag; devices may
/// still clamp lower
pub const MAX_SHADOW_MAP_SIZE: u32 = 16384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Walking Cube".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub mode: WalkMode,
    /// Per-frame angle in fixed mode
    pub step_degrees: f32,
    /// Length of one quarter-turn leg in tween mode
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            mode: WalkMode::Tween,
            step_degrees: 1.0,
            duration_ms: 2000,
            easing: Easing::BounceOut,
        }
    }
}

impl WalkConfig {
    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub shadows: bool,
    /// Shadow map edge length in texels
    pub shadow_map_size: u32,
    /// Half-width of the directional light's orthographic shadow volume
    pub shadow_extent: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shadows: true,
            shadow_map_size: 2048,
            shadow_extent: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub walk: WalkConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        if self.walk.step_degrees.is_nan() || self.walk.step_degrees <= 0.0 {
            bail!("step_degrees must be positive, got {}", self.walk.step_degrees);
        }
        if self.walk.duration_ms == 0 {
            bail!("duration_ms must be positive");
        }
        if self.render.shadow_map_size == 0 {
            bail!("shadow_map_size must be positive");
        }
        if self.render.shadow_map_size > MAX_SHADOW_MAP_SIZE {
            bail!(
                "shadow_map_size must be at most {}, got {}",
                MAX_SHADOW_MAP_SIZE,
                self.render.shadow_map_size
            );
        }
        if self.render.shadow_extent.is_nan() || self.render.shadow_extent <= 0.0 {
            bail!("shadow_extent must be positive, got {}", self.render.shadow_extent);
        }
        Ok(())
    }
}
