//! Event handler contract between the view layer and the screen
//! controller.

/// Capability invoked when the name-change control is activated.
///
/// The run loop dispatches button activation through this trait rather
/// than an inline callback, so alternative handlers stay pluggable.
pub trait EventHandlers {
    /// Handle a click on the Change button.
    fn on_change_click(&mut self);
}
