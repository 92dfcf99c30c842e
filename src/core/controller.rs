/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Pause or resume the walk
    Space,
    /// Reset the walk to its starting pose
    KeyR,
    Escape,
    /// Orbit drag
    MouseLeft,
    /// Pan drag
    MouseRight,
    MouseMiddle,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down since the last frame ended
    fn was_pressed(&self, button: Button) -> bool;
}
