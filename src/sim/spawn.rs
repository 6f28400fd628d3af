//! Stochastic enemy spawning
//!
//! One Bernoulli trial per tick. The trial's probability comes from the
//! configured policy; all randomness flows through a seeded PCG so a run is
//! reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::Enemy;
use crate::consts::SPAWN_PROBABILITY;
use crate::tuning::{Tuning, TuningError};

/// How likely a tick is to spawn an enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Fixed chance per tick; density follows the frame rate
    PerTick { probability: f32 },
    /// Expected spawns per second, scaled by each tick's `dt`
    PerSecond { rate: f32 },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::PerTick {
            probability: SPAWN_PROBABILITY,
        }
    }
}

impl SpawnPolicy {
    /// Chance that a tick lasting `dt_ms` spawns an enemy
    pub fn chance(&self, dt_ms: f32) -> f32 {
        match *self {
            SpawnPolicy::PerTick { probability } => probability,
            SpawnPolicy::PerSecond { rate } => {
                let dt_secs = dt_ms.max(0.0) / 1000.0;
                1.0 - (-rate * dt_secs).exp()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        match *self {
            SpawnPolicy::PerTick { probability } => {
                if (0.0..=1.0).contains(&probability) {
                    Ok(())
                } else {
                    Err(TuningError::Invalid {
                        name: "spawn.probability",
                        value: probability as f64,
                        expected: "in [0, 1]",
                    })
                }
            }
            SpawnPolicy::PerSecond { rate } => {
                if rate.is_finite() && rate >= 0.0 {
                    Ok(())
                } else {
                    Err(TuningError::Invalid {
                        name: "spawn.rate",
                        value: rate as f64,
                        expected: "finite and >= 0",
                    })
                }
            }
        }
    }
}

/// Enemy generator owned by the session
#[derive(Debug, Clone)]
pub struct Spawner {
    pub policy: SpawnPolicy,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(policy: SpawnPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Run this tick's trial; on success return an enemy at a uniform x in
    /// `[0, field width)`. The enemy has id 0 until the session adopts it.
    pub fn trial(&mut self, dt_ms: f32, tuning: &Tuning) -> Option<Enemy> {
        let chance = self.policy.chance(dt_ms);
        if self.rng.random::<f32>() >= chance {
            return None;
        }
        let x = self.rng.random_range(0.0..tuning.field.width);
        Some(Enemy::new(0, x, &tuning.enemy))
    }
}
