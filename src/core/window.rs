/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a degenerate window
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Minimized windows report a zero size and cannot be rendered to
    pub fn is_renderable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for WindowDimensions {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Window abstraction - what the render loop needs from the platform window
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Request the window to redraw
    fn request_redraw(&self);
}

impl WindowContext for winit::window::Window {
    fn dimensions(&self) -> WindowDimensions {
        self.inner_size().into()
    }

    fn request_redraw(&self) {
        winit::window::Window::request_redraw(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect() {
        assert_eq!(WindowDimensions::new(1280, 720).aspect(), 1280.0 / 720.0);
        assert_eq!(WindowDimensions::new(800, 0).aspect(), 1.0);
    }

    #[test]
    fn test_renderable() {
        assert!(WindowDimensions::new(1, 1).is_renderable());
        assert!(!WindowDimensions::new(0, 600).is_renderable());
        assert!(!WindowDimensions::new(800, 0).is_renderable());
    }

    #[test]
    fn test_from_physical_size() {
        let dims: WindowDimensions = winit::dpi::PhysicalSize::new(640u32, 480u32).into();
        assert_eq!(dims, WindowDimensions::new(640, 480));
    }

    // Mock window for testing trait implementation
    struct MockWindow {
        dims: WindowDimensions,
        redraw_called: std::cell::RefCell<usize>,
    }

    impl WindowContext for MockWindow {
        fn dimensions(&self) -> WindowDimensions {
            self.dims
        }

        fn request_redraw(&self) {
            *self.redraw_called.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_window_context_redraw() {
        let window = MockWindow {
            dims: WindowDimensions::new(800, 600),
            redraw_called: std::cell::RefCell::new(0),
        };

        window.request_redraw();
        window.request_redraw();
        assert_eq!(*window.redraw_called.borrow(), 2);
        assert_eq!(window.dimensions().aspect(), 800.0 / 600.0);
    }
}
