use glam::{Mat4, Vec3};

use crate::core::input_adapter::PointerInput;

/// Camera movement and control abstraction
pub trait CameraController {
    /// Apply pointer motion gathered during the last frame
    fn handle_input(&mut self, input: &PointerInput);

    /// Combined projection and view matrix for the given aspect ratio
    fn view_proj(&self, aspect: f32) -> Mat4;

    /// Get the camera position in world space
    fn eye(&self) -> Vec3;
}
