//! Shape generation for 2D primitives
//!
//! Turns a [`Snapshot`] into a flat list of draw commands in field
//! coordinates. Backends only rasterize; every position comes from here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::{PI, TAU};

use super::hud::overlay_lines;
use super::palette;
use crate::sim::{EntityView, Snapshot};

/// Number of background stars
pub const STAR_COUNT: usize = 100;
/// Points on an enemy star
const ENEMY_POINTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole field
    Clear { color: [f32; 4] },
    Rect { min: Vec2, size: Vec2, color: [f32; 4] },
    Circle { center: Vec2, radius: f32, color: [f32; 4] },
    Ellipse { center: Vec2, radii: Vec2, color: [f32; 4] },
    /// Closed, filled polygon
    Polygon { points: Vec<Vec2>, color: [f32; 4] },
    /// Text centered on `pos`
    Text { pos: Vec2, text: &'static str, size: f32, color: [f32; 4] },
}

/// Fixed background stars, seeded so they don't flicker between frames
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Vec2>,
}

impl Starfield {
    pub fn new(seed: u64, field: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.random_range(0.0..field.x),
                    rng.random_range(0.0..field.y),
                )
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Vec2] {
        &self.stars
    }
}

/// Ship: round body, head with two eyes. Proportions scale with its size
pub fn ship(view: &EntityView) -> Vec<DrawCommand> {
    let c = view.center;
    let (w, h) = (view.size.x, view.size.y);
    let head = c - Vec2::new(0.0, h * 0.3);
    let eye_dx = w / 8.0;
    let eye_r = w / 20.0;

    vec![
        DrawCommand::Ellipse {
            center: c + Vec2::new(0.0, h * 0.2),
            radii: Vec2::new(w / 2.0, h / 2.0),
            color: palette::SHIP_BODY,
        },
        DrawCommand::Circle {
            center: head,
            radius: h * 0.3,
            color: palette::SHIP_HEAD,
        },
        DrawCommand::Circle {
            center: head - Vec2::new(eye_dx, 0.0),
            radius: eye_r,
            color: palette::SHIP_EYES,
        },
        DrawCommand::Circle {
            center: head + Vec2::new(eye_dx, 0.0),
            radius: eye_r,
            color: palette::SHIP_EYES,
        },
    ]
}

pub fn projectile(view: &EntityView) -> DrawCommand {
    DrawCommand::Circle {
        center: view.center,
        radius: view.size.x.min(view.size.y) / 2.0,
        color: palette::PROJECTILE,
    }
}

/// Star polygon alternating outer and inner vertices, first point up
pub fn star_points(center: Vec2, outer: f32, inner: f32, rotation: f32) -> Vec<Vec2> {
    let step = TAU / ENEMY_POINTS as f32;
    (0..ENEMY_POINTS)
        .flat_map(|i| {
            let angle = i as f32 * step - PI / 2.0 + rotation;
            let mid = angle + step / 2.0;
            [
                center + outer * Vec2::new(angle.cos(), angle.sin()),
                center + inner * Vec2::new(mid.cos(), mid.sin()),
            ]
        })
        .collect()
}

/// Enemy: rotating five-point star with a darker core
pub fn enemy(view: &EntityView) -> Vec<DrawCommand> {
    let outer = view.size.x.min(view.size.y) / 2.0;
    vec![
        DrawCommand::Polygon {
            points: star_points(view.center, outer, outer * 0.47, view.rotation),
            color: palette::ENEMY_BODY,
        },
        DrawCommand::Circle {
            center: view.center,
            radius: outer / 3.0,
            color: palette::ENEMY_CORE,
        },
    ]
}

/// Full draw list for one frame, back to front
pub fn build_frame(snapshot: &Snapshot, starfield: &Starfield) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        1 + STAR_COUNT + 4 + snapshot.projectiles.len() + snapshot.enemies.len() * 2 + 2,
    );

    commands.push(DrawCommand::Clear {
        color: palette::BACKGROUND,
    });
    commands.extend(starfield.stars().iter().map(|&min| DrawCommand::Rect {
        min,
        size: Vec2::ONE,
        color: palette::STAR,
    }));

    commands.extend(ship(&snapshot.ship));
    commands.extend(snapshot.projectiles.iter().map(projectile));
    for view in &snapshot.enemies {
        commands.extend(enemy(view));
    }

    let mut pos = snapshot.field / 2.0;
    for &(text, size) in overlay_lines(snapshot.hud.phase) {
        commands.push(DrawCommand::Text {
            pos,
            text,
            size,
            color: palette::OVERLAY_TEXT,
        });
        pos.y += 40.0;
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, GamePhase, GameState, Projectile};
    use crate::tuning::Tuning;

    fn texts(commands: &[DrawCommand]) -> Vec<&'static str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(*text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starfield_is_stable_and_in_field() {
        let field = Vec2::new(800.0, 600.0);
        let a = Starfield::new(5, field);
        let b = Starfield::new(5, field);
        assert_eq!(a.stars(), b.stars());
        assert_eq!(a.stars().len(), STAR_COUNT);
        assert!(a
            .stars()
            .iter()
            .all(|s| s.x >= 0.0 && s.x < field.x && s.y >= 0.0 && s.y < field.y));
    }

    #[test]
    fn test_star_points_start_at_top() {
        let points = star_points(Vec2::ZERO, 15.0, 7.0, 0.0);
        assert_eq!(points.len(), 10);
        assert!(points[0].x.abs() < 1e-4);
        assert!((points[0].y + 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_frame_follows_entities() {
        let mut state = GameState::new(Tuning::default(), 1);
        let enemy = Enemy::new(0, 120.0, &state.tuning.enemy);
        state.adopt_enemy(enemy);
        let p = Projectile::new(0, Vec2::new(300.0, 200.0), &state.tuning.projectile);
        state.adopt_projectile(p);

        let snap = state.snapshot();
        let starfield = Starfield::new(1, snap.field);
        let frame = build_frame(&snap, &starfield);

        // clear + stars + ship(4) + projectile(1) + enemy(2)
        assert_eq!(frame.len(), 1 + STAR_COUNT + 4 + 1 + 2);
        assert!(frame.contains(&DrawCommand::Circle {
            center: Vec2::new(300.0, 200.0),
            radius: 4.0,
            color: palette::PROJECTILE,
        }));
        assert!(texts(&frame).is_empty());
    }

    #[test]
    fn test_overlays_follow_phase() {
        let mut state = GameState::new(Tuning::default(), 1);
        let starfield = Starfield::new(1, Vec2::new(800.0, 600.0));

        state.phase = GamePhase::Paused;
        assert_eq!(texts(&build_frame(&state.snapshot(), &starfield)), ["PAUSED"]);

        state.phase = GamePhase::GameOver;
        assert_eq!(
            texts(&build_frame(&state.snapshot(), &starfield)),
            ["GAME OVER", "Press R to restart"]
        );
    }
}
