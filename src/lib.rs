
mod device;
mod snapshot;
mod tracker;
mod window;

#[cfg(test)]
mod debug;

pub use device::{PointerDevice, ScriptedDevice};
pub use snapshot::{ButtonState, MouseButton, MouseSnapshot};
pub use tracker::MouseTracker;
pub use window::{PointerState, WindowDevice};
