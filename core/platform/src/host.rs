use crate::input::Keyboard;
use std::rc::Rc;

/// Primitives the embedding runtime provides.
///
/// Every call is fire-and-forget: a host that cannot honor a request logs
/// it and carries on.
pub trait Host {
    /// Create the display surface at the given pixel size.
    fn create_canvas(&mut self, width: u32, height: u32);

    fn set_title(&mut self, title: &str);

    /// Route key-down/key-up events to `keyboard`, replacing any listeners
    /// installed earlier.
    fn add_key_listeners(&mut self, keyboard: Rc<Keyboard>);

    fn remove_key_listeners(&mut self);

    /// Upload a full frame of converted pixels (byte order R, G, B, A).
    fn upload_pixels(&mut self, pixels: &[u32], width: u32, height: u32);

    /// Ask for a callback before the next repaint. Never blocks.
    fn request_animation_frame(&mut self);

    /// Wall-clock milliseconds.
    fn date_now(&self) -> f64;

    /// Monotonic milliseconds with sub-millisecond precision.
    fn performance_now(&self) -> f64;
}
