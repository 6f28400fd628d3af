//! Game tuning and playfield configuration
//!
//! Every number the simulation reads lives here. Defaults reproduce the
//! classic 800x600 game; a JSON document can override any subset:
//!
//! ```json
//! { "field": { "width": 1024.0 }, "spawn": { "mode": "per_second", "rate": 1.5 } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SpawnPolicy;

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Player ship parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub width: f32,
    pub height: f32,
    /// Distance from the field's bottom edge to the ship's center
    pub bottom_margin: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Minimum time between shots (ms); a shot needs strictly more than this
    pub shoot_delay_ms: f64,
    pub muzzle_offset: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            bottom_margin: SHIP_BOTTOM_MARGIN,
            speed: SHIP_SPEED,
            shoot_delay_ms: SHOOT_DELAY_MS,
            muzzle_offset: MUZZLE_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick (upward)
    pub speed: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: PROJECTILE_SIZE,
            height: PROJECTILE_SIZE,
            speed: PROJECTILE_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick (downward)
    pub speed: f32,
    pub spawn_y: f32,
    /// Radians per tick, visual only
    pub rotation_step: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            speed: ENEMY_SPEED,
            spawn_y: ENEMY_SPAWN_Y,
            rotation_step: ENEMY_ROTATION_STEP,
        }
    }
}

/// Scoring and damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub kill_score: u64,
    pub contact_damage: u8,
    pub max_health: u8,
    pub max_shield: u8,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            kill_score: KILL_SCORE,
            contact_damage: CONTACT_DAMAGE,
            max_health: MAX_HEALTH,
            max_shield: MAX_SHIELD,
        }
    }
}

/// Complete tuning for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    pub ship: ShipTuning,
    pub projectile: ProjectileTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnPolicy,
    pub combat: CombatTuning,
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed into a `Tuning`
    Parse(serde_json::Error),
    /// A value parsed fine but is outside the range the simulation supports
    Invalid {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "tuning JSON is malformed: {}", e),
            TuningError::Invalid {
                name,
                value,
                expected,
            } => write!(f, "tuning value '{}' = {} must be {}", name, value, expected),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            name,
            value: value as f64,
            expected: "finite and > 0",
        })
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            name,
            value: value as f64,
            expected: "finite",
        })
    }
}

fn percent_cap(name: &'static str, value: u8) -> Result<(), TuningError> {
    if (1..=100).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            name,
            value: value as f64,
            expected: "in 1..=100",
        })
    }
}

impl Tuning {
    /// Default tuning on a differently sized playfield
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field: FieldTuning { width, height },
            ..Self::default()
        }
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value against the range the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("field.width", self.field.width)?;
        positive("field.height", self.field.height)?;

        positive("ship.width", self.ship.width)?;
        positive("ship.height", self.ship.height)?;
        positive("ship.speed", self.ship.speed)?;
        finite("ship.bottom_margin", self.ship.bottom_margin)?;
        finite("ship.muzzle_offset", self.ship.muzzle_offset)?;
        if self.ship.width > self.field.width {
            return Err(TuningError::Invalid {
                name: "ship.width",
                value: self.ship.width as f64,
                expected: "no wider than field.width",
            });
        }
        if !(self.ship.shoot_delay_ms.is_finite() && self.ship.shoot_delay_ms >= 0.0) {
            return Err(TuningError::Invalid {
                name: "ship.shoot_delay_ms",
                value: self.ship.shoot_delay_ms,
                expected: "finite and >= 0",
            });
        }

        positive("projectile.width", self.projectile.width)?;
        positive("projectile.height", self.projectile.height)?;
        positive("projectile.speed", self.projectile.speed)?;

        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("enemy.speed", self.enemy.speed)?;
        finite("enemy.spawn_y", self.enemy.spawn_y)?;
        finite("enemy.rotation_step", self.enemy.rotation_step)?;

        self.spawn.validate()?;

        percent_cap("combat.max_health", self.combat.max_health)?;
        percent_cap("combat.max_shield", self.combat.max_shield)?;

        Ok(())
    }
}
