//! Orbit camera: the eye sits on a sphere around a target point and is moved
//! by pointer drags (orbit and pan) and the scroll wheel (dolly).

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::core::input_adapter::PointerInput;
use crate::traits::CameraController;

pub const ROTATE_SPEED: f32 = 0.005;
pub const PAN_SPEED: f32 = 0.001;
pub const ZOOM_FACTOR: f32 = 0.95;
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 500.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Camera at `eye` orbiting `target`
    pub fn new(eye: Vec3, target: Vec3, fovy_degrees: f32, znear: f32, zfar: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length().max(f32::EPSILON))
                .clamp(-1.0, 1.0)
                .asin()
                .clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fovy: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Unit vector from the target toward the eye
    fn offset_direction(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn forward(&self) -> Vec3 {
        -self.offset_direction()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Orbit by a pointer drag of (`dx`, `dy`) pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SPEED;
        self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Slide the target in the view plane, scaled by distance so the scene
    /// tracks the pointer
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * PAN_SPEED;
        self.target += (self.up() * dy - self.right() * dx) * scale;
    }

    /// Positive `lines` move the eye closer
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance * ZOOM_FACTOR.powf(lines)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy, aspect.max(f32::EPSILON), self.znear, self.zfar)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 1.0, 10.0), Vec3::ZERO, 75.0, 0.01, 1000.0)
    }
}

impl CameraController for OrbitCamera {
    fn handle_input(&mut self, input: &PointerInput) {
        let (rx, ry) = input.orbit;
        if rx != 0.0 || ry != 0.0 {
            self.rotate(rx, ry);
        }
        let (px, py) = input.pan;
        if px != 0.0 || py != 0.0 {
            self.pan(px, py);
        }
        if input.scroll != 0.0 {
            self.zoom(input.scroll);
        }
    }

    fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    fn eye(&self) -> Vec3 {
        self.target + self.offset_direction() * self.distance
    }
}
