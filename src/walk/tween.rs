use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Easing curves mapping normalized time in [0, 1] to progress in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    QuadOut,
    CubicOut,
    /// Penner's bounce: overshoots to 1 early, then settles with smaller hops
    BounceOut,
}

impl Easing {
    #[inline]
    pub fn sample(self, x: f32) -> f32 {
        let t = x.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Time-based interpolation of a scalar between two endpoints
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// Tween from `from` to `to` over `duration` seconds
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `delta` seconds and return the new value
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }

    /// Normalized time in [0, 1]; a zero-length tween is always complete
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Current value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        let progress = self.progress();
        if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.sample(progress)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn to(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::BounceOut,
    ];

    #[test]
    fn test_easing_endpoints() {
        for easing in ALL {
            assert!(easing.sample(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.sample(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        for easing in ALL {
            assert_eq!(easing.sample(-1.0), easing.sample(0.0));
            assert_eq!(easing.sample(2.0), easing.sample(1.0));
        }
    }

    #[test]
    fn test_bounce_touches_one_then_dips() {
        let peak = Easing::BounceOut.sample(1.0 / 2.75);
        assert!((peak - 1.0).abs() < 1e-5);
        let dip = Easing::BounceOut.sample(1.5 / 2.75);
        assert!((dip - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_tween_advances_to_end() {
        let mut tween = Tween::new(0.0, 10.0, 2.0, Easing::Linear);
        assert_eq!(tween.advance(0.5), 2.5);
        assert!(!tween.is_finished());
        assert_eq!(tween.advance(5.0), 10.0);
        assert!(tween.is_finished());
        // holds its end value
        assert_eq!(tween.advance(1.0), 10.0);
    }

    #[test]
    fn test_zero_duration_tween_is_finished() {
        let tween = Tween::new(1.0, 3.0, 0.0, Easing::BounceOut);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 3.0);
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut tween = Tween::new(0.0, 1.0, 1.0, Easing::Linear);
        tween.advance(0.5);
        assert_eq!(tween.advance(-0.25), 0.5);
    }
}
