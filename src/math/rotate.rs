use glam::{Quat, Vec3};

/// Rotates `point` about `pivot` by `theta` radians around `axis`.
///
/// The point is moved into pivot space, rotated, and moved back. `axis`
/// must be normalized.
pub fn rotate_about_point(point: Vec3, pivot: Vec3, axis: Vec3, theta: f32) -> Vec3 {
    Quat::from_axis_angle(axis, theta) * (point - pivot) + pivot
}
