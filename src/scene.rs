use glam::Mat4;

use crate::geometry::Mesh;
use crate::light::{AmbientLight, DirectionalLight};
use crate::math::hex_to_linear;

/// A mesh placed in the world
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: Mesh,
    /// Linear RGB
    pub color: [f32; 3],
    pub transform: Mat4,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneObject {
    pub fn new(name: &'static str, mesh: Mesh, hex: u32) -> Self {
        Self {
            name,
            mesh,
            color: hex_to_linear(hex),
            transform: Mat4::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }
}

/// Everything the renderer draws in one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    /// Linear RGB
    pub clear_color: [f32; 3],
}

impl Scene {
    /// Empty scene lit by the given lights
    pub fn new(ambient: AmbientLight, sun: DirectionalLight, clear_hex: u32) -> Self {
        Self {
            objects: Vec::new(),
            ambient,
            sun,
            clear_color: hex_to_linear(clear_hex),
        }
    }

    /// Add an object and return its index
    pub fn add(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn set_transform(&mut self, index: usize, transform: Mat4) {
        if let Some(object) = self.objects.get_mut(index) {
            object.transform = transform;
        }
    }
}
