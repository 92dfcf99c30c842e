use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use walking_cube::camera::OrbitCamera;
use walking_cube::cli::Cli;
use walking_cube::config::AppConfig;
use walking_cube::core::clock::Clock;
use walking_cube::core::controller::{Button, Controller};
use walking_cube::core::input_adapter::WinitController;
use walking_cube::core::window::WindowContext;
use walking_cube::renderer::SceneRenderer;
use walking_cube::scenes::WalkingCubeScene;
use walking_cube::traits::{CameraController, SceneProvider};

struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    scene: WalkingCubeScene,
    camera: OrbitCamera,
    controller: WinitController,
    clock: Clock,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = WalkingCubeScene::new(&config);
        log::info!("Scene: {}", scene.name());
        Self {
            config,
            window: None,
            renderer: None,
            scene,
            camera: OrbitCamera::default(),
            controller: WinitController::new(),
            clock: Clock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();

        if self.controller.was_pressed(Button::Space) {
            self.scene.toggle_pause();
        }
        if self.controller.was_pressed(Button::KeyR) {
            self.scene.reset();
        }

        self.camera.handle_input(&self.controller.pointer_input());
        self.scene.update(frame.delta);
        self.controller.end_frame();

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        match renderer.render(self.scene.scene(), &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_config = &self.config.window;
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(window_config.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    window_config.width,
                    window_config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            self.scene.scene(),
            &self.config.render,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let dimensions = window.dimensions();
        log::info!("Window {}x{}", dimensions.width, dimensions.height);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } if self.controller.is_down(Button::Escape) => {
                event_loop.exit()
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.into());
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().resolve()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config);

    log::info!(
        "Controls: left-drag orbit, right-drag pan, wheel zoom, Space pause, R reset, Escape quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
