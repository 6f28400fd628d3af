//! Session state and core simulation types
//!
//! The session exclusively owns the ship and both entity collections.
//! Entities never reference each other; relationships exist only for the
//! duration of a collision check.

use serde::{Deserialize, Serialize};

use super::entities::{Enemy, Projectile, Ship};
use super::snapshot::{EntityKind, EntityView, HudSnapshot, Snapshot};
use super::spawn::Spawner;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation suspended until toggled back
    Paused,
    /// Health ran out; only a reset leaves this phase
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { id: u32 },
    EnemySpawned { id: u32 },
    EnemyDestroyed { enemy: u32, projectile: u32 },
    ShipHit { enemy: u32, absorbed_by_shield: bool },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Never decreases within a session
    pub score: u64,
    /// 0..=max_health
    pub health: u8,
    /// 0..=max_shield
    pub shield: u8,
    pub ship: Ship,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    pub spawner: Spawner,
    /// Simulated ticks this session
    pub time_ticks: u64,
    /// Sum of sanitized frame times this session (ms)
    pub elapsed_ms: f64,
    /// Events from the most recent simulated tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given tuning and seed
    ///
    /// The tuning is assumed valid; see [`Tuning::validate`].
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            health: tuning.combat.max_health,
            shield: tuning.combat.max_shield,
            ship: Ship::new(&tuning),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            spawner: Spawner::new(tuning.spawn, seed),
            time_ticks: 0,
            elapsed_ms: 0.0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take ownership of a projectile, giving it a fresh id
    pub fn adopt_projectile(&mut self, mut projectile: Projectile) -> u32 {
        projectile.id = self.next_entity_id();
        let id = projectile.id;
        self.projectiles.push(projectile);
        id
    }

    /// Take ownership of an enemy, giving it a fresh id
    pub fn adopt_enemy(&mut self, mut enemy: Enemy) -> u32 {
        enemy.id = self.next_entity_id();
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    /// Restore ship, entities and scalars to their starting values
    ///
    /// The spawner keeps its RNG stream so the next run sees different
    /// enemies, and ids keep increasing.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.health = self.tuning.combat.max_health;
        self.shield = self.tuning.combat.max_shield;
        self.ship = Ship::new(&self.tuning);
        self.projectiles.clear();
        self.enemies.clear();
        self.time_ticks = 0;
        self.elapsed_ms = 0.0;
        self.events.clear();
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            health: self.health,
            shield: self.shield,
            phase: self.phase,
        }
    }

    /// Read-only view for the render pass
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: glam::Vec2::new(self.tuning.field.width, self.tuning.field.height),
            hud: self.hud(),
            ship: EntityView {
                id: 0,
                kind: EntityKind::Ship,
                center: self.ship.pos,
                size: self.ship.size,
                rotation: 0.0,
            },
            projectiles: self
                .projectiles
                .iter()
                .filter(|p| p.is_active())
                .map(|p| EntityView {
                    id: p.id,
                    kind: EntityKind::Projectile,
                    center: p.pos,
                    size: p.size,
                    rotation: 0.0,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .filter(|e| e.is_active())
                .map(|e| EntityView {
                    id: e.id,
                    kind: EntityKind::Enemy,
                    center: e.pos,
                    size: e.size,
                    rotation: e.rotation,
                })
                .collect(),
        }
    }
}
