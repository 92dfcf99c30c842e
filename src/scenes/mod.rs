mod walking_cube;

pub use walking_cube::{driver_for, WalkingCubeScene};
