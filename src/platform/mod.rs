//! Platform abstraction layer
//!
//! Everything between the host environment and the simulation:
//! - Time (frame timestamps to `dt`)
//! - Input events (held keys and one-shot triggers)
//! - The per-frame driver and its demo autopilot

pub mod autopilot;
pub mod driver;
pub mod input;
pub mod time;

pub use driver::FrameDriver;
pub use input::{HeldKey, InputCollector, KeyAction, Trigger, map_key};
pub use time::FrameClock;
