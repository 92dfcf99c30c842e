//! The walking box: a two-state machine (upright, tipped) that rolls a box
//! forward along +Z by tipping it 90° at a time about its leading bottom edge.
//!
//! Each call to [`Walk::step`] either rotates the box a little further about
//! the current pivot, or, once the target angle is reached, snaps to it and
//! moves the pivot to the next edge.

mod driver;
mod tween;

pub use driver::{AngleDriver, WalkMode};
pub use tween::{Easing, Tween};

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::math::rotate_about_point;

/// One quarter turn, the angle of a single walk step
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Rotations this close to the target count as having reached it
pub const ANGLE_TOLERANCE: f32 = 1e-4;

/// Default box dimensions: wide, tall and thin
pub const DEFAULT_BOX_SIZE: Vec3 = Vec3::new(5.0, 5.0, 1.0);

/// Default starting pivot: the bottom front edge of the default box
pub const DEFAULT_PIVOT: Vec3 = Vec3::new(-2.5, -2.5, 0.5);

/// Result of a single [`Walk::step`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The box rotated about the pivot by the given angle (radians)
    Rotated(f32),
    /// The target was reached: rotation snapped, pivot moved, state toggled
    Advanced {
        /// Whether the box was upright before this step
        from_upright: bool,
        /// Z coordinate of the new pivot
        pivot_z: f32,
        /// The new target rotation (radians)
        target: f32,
    },
}

/// Walking box state
#[derive(Debug, Clone)]
pub struct Walk {
    size: Vec3,
    start_pivot: Vec3,
    position: Vec3,
    rotation: f32,
    target: f32,
    pivot: Vec3,
    upright: bool,
    steps: u64,
}

impl Walk {
    /// Create a walk for a box of `size` centred at the origin, tipping first
    /// about `pivot`, which must lie on its bottom front edge
    pub fn new(size: Vec3, pivot: Vec3) -> Self {
        Self {
            size,
            start_pivot: pivot,
            position: Vec3::ZERO,
            rotation: 0.0,
            target: QUARTER_TURN,
            pivot,
            upright: true,
            steps: 0,
        }
    }

    /// Advance the walk by `theta` radians
    ///
    /// While the rotation is short of the target, the box centre is rotated
    /// about the pivot around +X and the box's own rotation grows by the same
    /// amount. A positive `theta` never carries the box past the target.
    /// Once the target is reached the next call snaps the rotation, sets a new
    /// target a quarter turn further, and advances the pivot by the box height
    /// (from upright) or depth (from tipped). The box centre is re-derived
    /// from the new pivot so rounding doesn't carry from one step to the next.
    pub fn step(&mut self, theta: f32) -> StepOutcome {
        if self.rotation < self.target {
            let theta = theta.min(self.target - self.rotation);
            self.position = rotate_about_point(self.position, self.pivot, Vec3::X, theta);
            self.rotation += theta;
            if self.target - self.rotation <= self.snap_tolerance() {
                self.rotation = self.target;
            }
            StepOutcome::Rotated(theta)
        } else {
            let from_upright = self.upright;
            self.rotation = self.target;
            self.pivot.z += self.stride();
            self.upright = !self.upright;
            self.steps += 1;
            self.target = (self.steps + 1) as f32 * QUARTER_TURN;
            self.position = self.rest_position();
            StepOutcome::Advanced {
                from_upright,
                pivot_z: self.pivot.z,
                target: self.target,
            }
        }
    }

    /// Distance the pivot moves when the current step completes
    pub fn stride(&self) -> f32 {
        if self.upright {
            self.size.y
        } else {
            self.size.z
        }
    }

    /// Centre of the box resting on its current face, in front of the pivot
    fn rest_position(&self) -> Vec3 {
        let half = self.size * 0.5;
        let (height, depth) = if self.upright {
            (half.y, half.z)
        } else {
            (half.z, half.y)
        };
        Vec3::new(
            self.pivot.x + half.x,
            self.pivot.y + height,
            self.pivot.z - depth,
        )
    }

    /// Far along the walk the angles are large and one f32 ulp can exceed
    /// [`ANGLE_TOLERANCE`]
    fn snap_tolerance(&self) -> f32 {
        ANGLE_TOLERANCE.max(self.target.abs() * f32::EPSILON * 4.0)
    }

    /// Return to the initial pose
    pub fn reset(&mut self) {
        *self = Self::new(self.size, self.start_pivot);
    }

    /// Centre of the box
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Accumulated rotation about X, in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotation the box is heading for, in radians
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn is_upright(&self) -> bool {
        self.upright
    }

    /// Completed quarter turns
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// World transform of the box: translate to the centre, then rotate about X
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_x(self.rotation)
    }
}

impl Default for Walk {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_SIZE, DEFAULT_PIVOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walk_starts_upright() {
        let walk = Walk::default();
        assert!(walk.is_upright());
        assert_eq!(walk.rotation(), 0.0);
        assert_eq!(walk.target(), QUARTER_TURN);
        assert_eq!(walk.pivot(), DEFAULT_PIVOT);
        assert_eq!(walk.position(), Vec3::ZERO);
        assert_eq!(walk.steps(), 0);
    }

    #[test]
    fn test_positive_theta_is_clamped_to_target() {
        let mut walk = Walk::default();
        let outcome = walk.step(2.0 * QUARTER_TURN);
        assert_eq!(outcome, StepOutcome::Rotated(QUARTER_TURN));
        assert_eq!(walk.rotation(), QUARTER_TURN);
    }

    #[test]
    fn test_negative_theta_rotates_back() {
        let mut walk = Walk::default();
        walk.step(0.5);
        walk.step(-0.2);
        assert!((walk.rotation() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_lays_box_down_forward() {
        let mut walk = Walk::default();
        walk.step(QUARTER_TURN);
        // The 5x5x1 box now lies flat on its back face, in front of the pivot
        let expected = Vec3::new(0.0, -2.0, 3.0);
        assert!((walk.position() - expected).length() < 1e-5);
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut walk = Walk::default();
        walk.step(QUARTER_TURN);
        walk.step(0.0);
        walk.step(0.3);
        walk.reset();
        assert_eq!(walk.rotation(), 0.0);
        assert_eq!(walk.pivot(), DEFAULT_PIVOT);
        assert!(walk.is_upright());
        assert_eq!(walk.steps(), 0);
    }

    #[test]
    fn test_advance_settles_box_on_rest_pose() {
        let mut walk = Walk::default();
        walk.step(QUARTER_TURN);
        walk.step(0.0);
        assert_eq!(walk.position(), Vec3::new(0.0, -2.0, 3.0));
        assert_eq!(walk.target(), 2.0 * QUARTER_TURN);

        walk.step(QUARTER_TURN);
        walk.step(0.0);
        assert_eq!(walk.position(), Vec3::new(0.0, 0.0, 6.0));
        assert!(walk.is_upright());
    }

    #[test]
    fn test_model_matrix_places_box_centre() {
        let mut walk = Walk::default();
        walk.step(QUARTER_TURN);
        let centre = walk.model_matrix().transform_point3(Vec3::ZERO);
        assert!((centre - walk.position()).length() < 1e-5);
    }
}
