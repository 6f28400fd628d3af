//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous step per frame, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, intersects};
pub use entities::{Enemy, Projectile, Ship};
pub use snapshot::{EntityKind, EntityView, HudSnapshot, Snapshot};
pub use spawn::{SpawnPolicy, Spawner};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
