//! Space Shooter - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, session state)
//! - `tuning`: Data-driven game balance and playfield configuration
//! - `platform`: Frame clock, input collection and the frame driver
//! - `renderer`: Draw lists built from read-only snapshots (canvas backend on the web)

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{FrameDriver, InputCollector};
pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the defaults behind [`Tuning::default`]. Simulation code reads
/// values from its `Tuning`, never from here directly.
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 40.0;
    pub const SHIP_HEIGHT: f32 = 50.0;
    /// Distance from the bottom edge to the ship's center
    pub const SHIP_BOTTOM_MARGIN: f32 = 50.0;
    /// Horizontal pixels per tick
    pub const SHIP_SPEED: f32 = 5.0;
    pub const SHOOT_DELAY_MS: f64 = 250.0;
    /// Projectiles appear this far above the ship's center
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 8.0;
    /// Upward pixels per tick
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Downward pixels per tick
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Spawn just above the top edge
    pub const ENEMY_SPAWN_Y: f32 = -20.0;
    /// Radians per tick (cosmetic)
    pub const ENEMY_ROTATION_STEP: f32 = 0.05;

    /// Per-tick spawn chance
    pub const SPAWN_PROBABILITY: f32 = 0.02;

    /// Combat
    pub const KILL_SCORE: u64 = 10;
    pub const CONTACT_DAMAGE: u8 = 20;
    pub const MAX_HEALTH: u8 = 100;
    pub const MAX_SHIELD: u8 = 100;

    /// Longest frame the clock will report (ms), so a sleeping tab
    /// doesn't produce one giant step
    pub const MAX_FRAME_DT_MS: f32 = 100.0;
}
