pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod geometry;
pub mod light;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;
pub mod walk;

pub use config::AppConfig;
pub use scenes::WalkingCubeScene;
pub use walk::{StepOutcome, Walk};
