use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixels of touchpad scroll that count as one wheel line
const PIXELS_PER_LINE: f32 = 50.0;

/// Camera-relevant pointer motion accumulated over one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Cursor travel while the orbit button is held
    pub orbit: (f32, f32),
    /// Cursor travel while the pan button is held
    pub pan: (f32, f32),
    /// Wheel lines, positive toward the scene
    pub scroll: f32,
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Buttons that went down during the current frame
    fresh: Vec<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    scroll: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            fresh: Vec::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
            scroll: 0.0,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_state(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.fresh.push(button);
                }
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    fn move_cursor(&mut self, x: f32, y: f32) {
        if let Some(old_pos) = self.mouse_position {
            self.mouse_delta.0 += x - old_pos.0;
            self.mouse_delta.1 += y - old_pos.1;
        }
        self.mouse_position = Some((x, y));
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Pointer motion for this frame, routed by which drag button is held
    pub fn pointer_input(&self) -> PointerInput {
        let orbit = if self.is_down(Button::MouseLeft) {
            self.mouse_delta
        } else {
            (0.0, 0.0)
        };
        let pan = if self.is_down(Button::MouseRight) || self.is_down(Button::MouseMiddle) {
            self.mouse_delta
        } else {
            (0.0, 0.0)
        };
        PointerInput {
            orbit,
            pan,
            scroll: self.scroll,
        }
    }

    /// Reset per-frame state (mouse delta, scroll, fresh presses)
    /// Call this at the end of each frame after processing input
    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll = 0.0;
        self.fresh.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Space => Some(Button::Space),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.fresh.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit events can't be constructed here (private fields), so these drive
    // the same state transitions through the internal helpers

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.pressed_keys.is_empty());
        assert_eq!(controller.mouse_position, None);
        assert_eq!(controller.pointer_input(), PointerInput::default());
    }

    #[test]
    fn test_first_cursor_move_has_no_delta() {
        let mut controller = WinitController::new();
        controller.move_cursor(100.0, 100.0);
        assert_eq!(controller.mouse_delta, (0.0, 0.0));
        controller.move_cursor(110.0, 95.0);
        assert_eq!(controller.mouse_delta, (10.0, -5.0));
    }

    #[test]
    fn test_left_drag_orbits() {
        let mut controller = WinitController::new();
        controller.set_state(Button::MouseLeft, ElementState::Pressed);
        controller.move_cursor(0.0, 0.0);
        controller.move_cursor(20.0, 4.0);
        let input = controller.pointer_input();
        assert_eq!(input.orbit, (20.0, 4.0));
        assert_eq!(input.pan, (0.0, 0.0));
    }

    #[test]
    fn test_right_drag_pans() {
        let mut controller = WinitController::new();
        controller.set_state(Button::MouseRight, ElementState::Pressed);
        controller.move_cursor(0.0, 0.0);
        controller.move_cursor(-3.0, 7.0);
        let input = controller.pointer_input();
        assert_eq!(input.orbit, (0.0, 0.0));
        assert_eq!(input.pan, (-3.0, 7.0));
    }

    #[test]
    fn test_end_frame_clears_transients() {
        let mut controller = WinitController::new();
        controller.set_state(Button::Space, ElementState::Pressed);
        controller.move_cursor(0.0, 0.0);
        controller.move_cursor(5.0, 5.0);
        controller.scroll = 2.0;
        assert!(controller.was_pressed(Button::Space));

        controller.end_frame();
        assert!(!controller.was_pressed(Button::Space));
        assert!(controller.is_down(Button::Space));
        assert_eq!(controller.mouse_delta, (0.0, 0.0));
        assert_eq!(controller.pointer_input().scroll, 0.0);
        // Position should remain
        assert_eq!(controller.mouse_position, Some((5.0, 5.0)));
    }

    #[test]
    fn test_release_removes_button() {
        let mut controller = WinitController::new();
        controller.set_state(Button::MouseLeft, ElementState::Pressed);
        controller.set_state(Button::MouseLeft, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.pressed_keys.is_empty());
    }

    #[test]
    fn test_release_all_on_focus_loss() {
        let mut controller = WinitController::new();
        controller.set_state(Button::MouseLeft, ElementState::Pressed);
        controller.set_state(Button::MouseRight, ElementState::Pressed);
        controller.release_all();
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::MouseRight));
    }
}
