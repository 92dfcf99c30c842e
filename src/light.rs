use glam::{Mat4, Vec3};

use crate::math::hex_to_linear;

/// Uniform light applied to every surface regardless of orientation
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    /// Linear RGB
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(hex: u32, intensity: f32) -> Self {
        Self {
            color: hex_to_linear(hex),
            intensity,
        }
    }
}

/// Orthographic volume the directional light renders its shadow map from
#[derive(Debug, Clone, Copy)]
pub struct ShadowCamera {
    /// Half-width and half-height of the volume
    pub extent: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            extent: 50.0,
            near: 0.5,
            far: 100.0,
        }
    }
}

/// Parallel light shining from `position` toward `target`
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub cast_shadow: bool,
    pub shadow: ShadowCamera,
}

impl DirectionalLight {
    pub fn new(hex: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            color: hex_to_linear(hex),
            intensity,
            position,
            target: Vec3::ZERO,
            cast_shadow: false,
            shadow: ShadowCamera::default(),
        }
    }

    /// Unit vector from a lit surface toward the light
    pub fn direction_to_light(&self) -> Vec3 {
        (self.position - self.target).normalize_or_zero()
    }

    /// Light-space transform used by the shadow pass
    pub fn view_proj(&self) -> Mat4 {
        let forward = self.target - self.position;
        // look_at degenerates when up is parallel to the view direction
        let up = if forward.normalize_or_zero().dot(Vec3::Y).abs() > 0.99 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, self.target, up);
        let e = self.shadow.extent;
        let proj = Mat4::orthographic_rh(-e, e, -e, e, self.shadow.near, self.shadow.far);
        proj * view
    }
}
