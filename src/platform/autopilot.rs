//! Idle/demo mode - the ship plays itself
//!
//! Chases the lowest enemy still above the ship and holds fire while lined
//! up with it. Reads only the public snapshot, like a human player would.

use crate::sim::{Snapshot, TickInput};

/// Overwrite the movement and fire intents in `input`
pub fn steer(snapshot: &Snapshot, input: &mut TickInput) {
    let ship = &snapshot.ship;

    // Most urgent target: the enemy closest to the ship's row, still above it
    let target = snapshot
        .enemies
        .iter()
        .filter(|e| e.center.y < ship.center.y)
        .max_by(|a, b| {
            a.center
                .y
                .partial_cmp(&b.center.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let target_x = target.map_or(snapshot.field.x / 2.0, |e| e.center.x);
    let dx = target_x - ship.center.x;
    // Dead zone keeps the ship from jittering around the target
    let dead_zone = ship.size.x / 4.0;

    input.move_left = dx < -dead_zone;
    input.move_right = dx > dead_zone;
    input.fire = target.is_some_and(|e| dx.abs() < (e.size.x + ship.size.x) / 4.0);
}
