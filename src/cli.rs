// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::walk::{Easing, WalkMode};

#[derive(Parser, Debug, Clone)]
#[command(name = "walking-cube")]
#[command(about = "A box that walks by tipping over its edges", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How the rotation angle advances each frame
    #[arg(long, value_enum)]
    pub mode: Option<WalkMode>,

    /// Degrees per frame in fixed mode
    #[arg(long)]
    pub step_degrees: Option<f32>,

    /// Milliseconds per quarter turn in tween mode
    #[arg(long)]
    pub duration_ms: Option<u64>,

    /// Easing curve in tween mode
    #[arg(long, value_enum)]
    pub easing: Option<Easing>,

    /// Disable the shadow pass
    #[arg(long = "no-shadows", default_value = "false")]
    pub no_shadows: bool,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides on top
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.walk.mode = mode;
        }
        if let Some(step) = self.step_degrees {
            config.walk.step_degrees = step;
        }
        if let Some(duration) = self.duration_ms {
            config.walk.duration_ms = duration;
        }
        if let Some(easing) = self.easing {
            config.walk.easing = easing;
        }
        if self.no_shadows {
            config.render.shadows = false;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}
