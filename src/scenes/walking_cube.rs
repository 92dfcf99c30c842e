use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::config::{AppConfig, WalkConfig};
use crate::geometry::{cuboid, plane};
use crate::light::{AmbientLight, DirectionalLight};
use crate::scene::{Scene, SceneObject};
use crate::traits::SceneProvider;
use crate::walk::{AngleDriver, StepOutcome, Walk, WalkMode, QUARTER_TURN};

pub const CUBE_COLOR: u32 = 0x66ccff;
pub const PIVOT_COLOR: u32 = 0xff66cc;
pub const FLOOR_COLOR: u32 = 0xbbbbbb;
pub const CLEAR_COLOR: u32 = 0x020202;
pub const AMBIENT_COLOR: u32 = 0x666666;
pub const SUN_COLOR: u32 = 0xffffff;
pub const SUN_POSITION: Vec3 = Vec3::new(0.0, 60.0, 0.0);
pub const FLOOR_SIZE: f32 = 500.0;
pub const FLOOR_Y: f32 = -2.5;

/// The walking box on an endless floor, with a marker on the current pivot
pub struct WalkingCubeScene {
    scene: Scene,
    walk: Walk,
    driver: AngleDriver,
    initial_driver: AngleDriver,
    paused: bool,
    cube: usize,
    marker: usize,
}

impl WalkingCubeScene {
    pub fn new(config: &AppConfig) -> Self {
        let mut sun = DirectionalLight::new(SUN_COLOR, 0.5, SUN_POSITION);
        sun.cast_shadow = config.render.shadows;
        sun.shadow.extent = config.render.shadow_extent;
        sun.shadow.far = 100.0;

        let mut scene = Scene::new(AmbientLight::new(AMBIENT_COLOR, 1.0), sun, CLEAR_COLOR);
        let walk = Walk::default();

        let cube = scene.add(
            SceneObject::new("cube", cuboid(walk.size()), CUBE_COLOR)
                .with_transform(walk.model_matrix())
                .casting_shadow(),
        );
        let marker = scene.add(
            SceneObject::new("pivot", cuboid(Vec3::ONE), PIVOT_COLOR)
                .with_transform(Mat4::from_translation(walk.pivot())),
        );
        scene.add(
            SceneObject::new("floor", plane(FLOOR_SIZE, FLOOR_SIZE), FLOOR_COLOR)
                .with_transform(
                    Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0))
                        * Mat4::from_rotation_x(FRAC_PI_2),
                )
                .receiving_shadow(),
        );

        let driver = driver_for(&config.walk);
        log::info!(
            "Walking cube: {:?} mode, {} objects, shadows {}",
            driver.mode(),
            scene.objects.len(),
            if config.render.shadows { "on" } else { "off" }
        );

        Self {
            scene,
            walk,
            initial_driver: driver.clone(),
            driver,
            paused: false,
            cube,
            marker,
        }
    }

    /// Pause or resume; returns true when now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Walk {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Put the box back at its starting pose
    pub fn reset(&mut self) {
        self.walk.reset();
        self.driver = self.initial_driver.clone();
        self.sync_transforms();
        log::info!("Walk reset");
    }

    pub fn walk(&self) -> &Walk {
        &self.walk
    }

    fn sync_transforms(&mut self) {
        self.scene.set_transform(self.cube, self.walk.model_matrix());
        self.scene
            .set_transform(self.marker, Mat4::from_translation(self.walk.pivot()));
    }
}

impl SceneProvider for WalkingCubeScene {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn update(&mut self, delta: f32) {
        if self.paused {
            return;
        }

        let theta = self.driver.delta(delta);
        if let StepOutcome::Advanced {
            from_upright,
            pivot_z,
            target,
        } = self.walk.step(theta)
        {
            self.driver.retarget(self.walk.rotation(), target);
            log::debug!(
                "Step {}: tipped from {}, pivot z = {:.1}, next target {:.0}°",
                self.walk.steps(),
                if from_upright { "upright" } else { "flat" },
                pivot_z,
                target.to_degrees()
            );
        }
        self.sync_transforms();
    }

    fn name(&self) -> &str {
        "Walking Cube"
    }
}

/// Angle source for the configured walk mode
pub fn driver_for(walk: &WalkConfig) -> AngleDriver {
    match walk.mode {
        WalkMode::Fixed => AngleDriver::fixed(walk.step_degrees.to_radians()),
        WalkMode::Tween => AngleDriver::tween(QUARTER_TURN, walk.duration_secs(), walk.easing),
    }
}
