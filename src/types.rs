//! GPU-facing data layouts.
//!
//! Everything here is `#[repr(C)]` and `bytemuck`-safe so it can be written
//! straight into vertex and uniform buffers. Field order matches the structs
//! in `shaders/scene.wgsl`.

use bytemuck::{Pod, Zeroable};

/// Mesh vertex: position and normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };

    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Per-frame scene uniforms: camera, light and shadow parameters
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub shadows_enabled: f32,
    /// Unit vector pointing from the surface toward the light
    pub light_direction: [f32; 3],
    pub light_intensity: f32,
    pub light_color: [f32; 3],
    pub ambient_intensity: f32,
    pub ambient_color: [f32; 3],
    pub shadow_texel: f32,
}

/// Per-object uniforms
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of `model`, for normals under non-uniform scale
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub receive_shadow: f32,
}

impl ModelUniform {
    pub fn new(model: glam::Mat4, color: [f32; 3], receive_shadow: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
            color,
            receive_shadow: if receive_shadow { 1.0 } else { 0.0 },
        }
    }
}
