use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::tween::{Easing, Tween};

/// How the per-frame angle is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WalkMode {
    /// Eased interpolation toward each target, one leg per quarter turn
    Tween,
    /// A constant angle every frame
    Fixed,
}

/// Source of the angle the walk advances by each frame
#[derive(Debug, Clone)]
pub enum AngleDriver {
    Fixed {
        step: f32,
    },
    Tween {
        tween: Tween,
        duration: f32,
        easing: Easing,
    },
}

impl AngleDriver {
    /// Constant `step` radians per frame
    pub fn fixed(step: f32) -> Self {
        AngleDriver::Fixed { step }
    }

    /// Eased legs of `duration` seconds, the first running from 0 to `target`
    pub fn tween(target: f32, duration: f32, easing: Easing) -> Self {
        AngleDriver::Tween {
            tween: Tween::new(0.0, target, duration, easing),
            duration,
            easing,
        }
    }

    /// Angle to apply this frame, given `delta` seconds since the last one
    pub fn delta(&mut self, delta: f32) -> f32 {
        match self {
            AngleDriver::Fixed { step } => *step,
            AngleDriver::Tween { tween, .. } => {
                let before = tween.value();
                tween.advance(delta) - before
            }
        }
    }

    /// Start a new leg from `from` toward `to` after the walk snapped
    pub fn retarget(&mut self, from: f32, to: f32) {
        if let AngleDriver::Tween {
            tween,
            duration,
            easing,
        } = self
        {
            *tween = Tween::new(from, to, *duration, *easing);
        }
    }

    pub fn mode(&self) -> WalkMode {
        match self {
            AngleDriver::Fixed { .. } => WalkMode::Fixed,
            AngleDriver::Tween { .. } => WalkMode::Tween,
        }
    }
}
