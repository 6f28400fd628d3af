//! Per-frame simulation step
//!
//! Core game loop: triggers, then movement, spawning, collisions and
//! compaction, all synchronous over the session state.

use super::collision::intersects;
use super::state::{GameEvent, GamePhase, GameState};

/// Input intents for a single tick
///
/// Held keys are level-triggered and read every tick. `toggle_pause` and
/// `reset` are one-shot and should be set for exactly one tick per press.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub toggle_pause: bool,
    pub reset: bool,
    /// Frame timestamp (ms), used for the shot cooldown
    pub now_ms: f64,
}

/// Negative or non-finite frame times become a zero-length tick
fn sanitize_dt(dt_ms: f32) -> f32 {
    if dt_ms.is_finite() && dt_ms >= 0.0 {
        dt_ms
    } else {
        log::trace!("Sanitized frame time {} to 0", dt_ms);
        0.0
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    // Reset only applies after game over; the reset tick does nothing else
    if input.reset && state.phase == GamePhase::GameOver {
        state.reset();
        log::info!("Session reset");
        return;
    }

    // Handle pause toggle
    if input.toggle_pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused at score {}", state.score);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt_ms = sanitize_dt(dt_ms);
    state.events.clear();
    state.time_ticks += 1;
    state.elapsed_ms += dt_ms as f64;

    // Ship intents
    if input.move_left {
        state.ship.move_left();
    }
    if input.move_right {
        state.ship.move_right();
    }
    if input.fire {
        if let Some(projectile) = state.ship.shoot(input.now_ms) {
            let id = state.adopt_projectile(projectile);
            state.events.push(GameEvent::ShotFired { id });
        }
    }

    // Spawn trial
    if let Some(enemy) = state.spawner.trial(dt_ms, &state.tuning) {
        let id = state.adopt_enemy(enemy);
        log::trace!("Enemy {} spawned", id);
        state.events.push(GameEvent::EnemySpawned { id });
    }

    // Projectiles move first and drop off the top before any collision
    for projectile in state.projectiles.iter_mut() {
        projectile.advance();
    }
    state.projectiles.retain(|p| p.is_active());

    let field_height = state.tuning.field.height;
    let combat = state.tuning.combat;
    let ship_box = state.ship.bounding_box();

    for enemy in state.enemies.iter_mut() {
        enemy.advance(field_height);
        if !enemy.is_active() {
            continue;
        }

        // First overlapping projectile takes the credit; the enemy is gone
        // after that, so later overlaps this tick score nothing
        let enemy_box = enemy.bounding_box();
        if let Some(projectile) = state
            .projectiles
            .iter_mut()
            .find(|p| p.is_active() && intersects(&enemy_box, &p.bounding_box()))
        {
            state.score = state.score.saturating_add(combat.kill_score);
            enemy.deactivate();
            projectile.deactivate();
            log::debug!("Projectile {} destroyed enemy {}", projectile.id, enemy.id);
            state.events.push(GameEvent::EnemyDestroyed {
                enemy: enemy.id,
                projectile: projectile.id,
            });
            continue;
        }

        if intersects(&enemy_box, &ship_box) {
            let absorbed_by_shield = state.shield > 0;
            if absorbed_by_shield {
                state.shield = state.shield.saturating_sub(combat.contact_damage);
            } else {
                state.health = state.health.saturating_sub(combat.contact_damage);
            }
            enemy.deactivate();
            log::debug!(
                "Enemy {} hit ship (shield {}, health {})",
                enemy.id,
                state.shield,
                state.health
            );
            state.events.push(GameEvent::ShipHit {
                enemy: enemy.id,
                absorbed_by_shield,
            });
        }
    }

    // Compact once, after the collision pass
    state.enemies.retain(|e| e.is_active());
    state.projectiles.retain(|p| p.is_active());

    if state.health == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", state.score);
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}
