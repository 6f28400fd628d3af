//! Ship, projectile and enemy entities
//!
//! Motion is per tick, not per second: each `advance` moves an entity by its
//! full speed regardless of how long the frame took.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::{EnemyTuning, ProjectileTuning, Tuning};

/// The player's craft
///
/// Moves only along x; y is fixed for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per move call
    pub speed: f32,
    /// Timestamp (ms) of the last successful shot
    pub last_shot_ms: Option<f64>,
    pub shoot_delay_ms: f64,
    muzzle_offset: f32,
    field_width: f32,
    projectile: ProjectileTuning,
}

impl Ship {
    /// Ship centered horizontally near the bottom of the field
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.field.width / 2.0,
                tuning.field.height - tuning.ship.bottom_margin,
            ),
            size: Vec2::new(tuning.ship.width, tuning.ship.height),
            speed: tuning.ship.speed,
            last_shot_ms: None,
            shoot_delay_ms: tuning.ship.shoot_delay_ms,
            muzzle_offset: tuning.ship.muzzle_offset,
            field_width: tuning.field.width,
            projectile: tuning.projectile,
        }
    }

    /// Allowed range for the ship's center
    pub fn x_bounds(&self) -> (f32, f32) {
        let half = self.size.x / 2.0;
        (half, self.field_width - half)
    }

    fn clamp_x(&self, x: f32) -> f32 {
        let (lo, hi) = self.x_bounds();
        // max/min rather than clamp: clamp panics if lo > hi
        x.max(lo).min(hi)
    }

    pub fn move_left(&mut self) {
        self.pos.x = self.clamp_x(self.pos.x - self.speed);
    }

    pub fn move_right(&mut self) {
        self.pos.x = self.clamp_x(self.pos.x + self.speed);
    }

    /// Fire if the cooldown has elapsed
    ///
    /// A shot needs strictly more than `shoot_delay_ms` since the last one.
    /// On refusal nothing changes. The returned projectile has id 0; the
    /// session assigns a real id when it takes ownership.
    pub fn shoot(&mut self, now_ms: f64) -> Option<Projectile> {
        if let Some(last) = self.last_shot_ms {
            if !(now_ms - last > self.shoot_delay_ms) {
                return None;
            }
        }
        self.last_shot_ms = Some(now_ms);
        let muzzle = Vec2::new(self.pos.x, self.pos.y - self.muzzle_offset);
        Some(Projectile::new(0, muzzle, &self.projectile))
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// A shot travelling up the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick (upward)
    pub speed: f32,
    active: bool,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, tuning: &ProjectileTuning) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            active: true,
        }
    }

    /// Move up one tick; leaving through the top edge deactivates
    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
        if self.pos.y < -self.size.y {
            self.active = false;
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick (downward)
    pub speed: f32,
    /// Visual only, never used for collision
    pub rotation: f32,
    rotation_step: f32,
    active: bool,
}

impl Enemy {
    /// Enemy at column `x`, just above the top edge
    pub fn new(id: u32, x: f32, tuning: &EnemyTuning) -> Self {
        Self {
            id,
            pos: Vec2::new(x, tuning.spawn_y),
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            rotation: 0.0,
            rotation_step: tuning.rotation_step,
            active: true,
        }
    }

    /// Move down one tick; passing below the field deactivates
    pub fn advance(&mut self, field_height: f32) {
        self.pos.y += self.speed;
        self.rotation += self.rotation_step;
        if self.pos.y > field_height + self.size.y {
            self.active = false;
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
