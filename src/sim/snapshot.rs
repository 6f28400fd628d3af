//! Read-only views of the session for HUD and rendering

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::GamePhase;

/// Scalars shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub health: u8,
    pub shield: u8,
    pub phase: GamePhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Projectile,
    Enemy,
}

/// Position and bounding shape of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub center: Vec2,
    pub size: Vec2,
    /// Radians, visual only
    pub rotation: f32,
}

impl EntityView {
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }
}

/// Everything the render pass may read after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Playfield width and height
    pub field: Vec2,
    pub hud: HudSnapshot,
    pub ship: EntityView,
    pub projectiles: Vec<EntityView>,
    pub enemies: Vec<EntityView>,
}
