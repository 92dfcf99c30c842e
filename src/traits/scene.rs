use crate::scene::Scene;

/// Scene construction and per-frame animation abstraction
pub trait SceneProvider {
    /// Current renderable state
    fn scene(&self) -> &Scene;

    /// Advance animation by `delta` seconds
    fn update(&mut self, _delta: f32) {}

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
