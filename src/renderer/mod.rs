//! Rendering module
//!
//! Builds backend-independent draw lists from simulation snapshots; the
//! canvas backend rasterizes them in the browser.

pub mod hud;
pub mod palette;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use hud::HudText;
pub use shapes::{DrawCommand, Starfield, build_frame};
