//! Colors for game elements

pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.2, 1.0];
pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const SHIP_BODY: [f32; 4] = [1.0, 0.41, 0.71, 1.0];
pub const SHIP_HEAD: [f32; 4] = [1.0, 0.71, 0.76, 1.0];
pub const SHIP_EYES: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const PROJECTILE: [f32; 4] = [1.0, 0.08, 0.58, 1.0];
pub const ENEMY_BODY: [f32; 4] = [0.29, 0.56, 0.89, 1.0];
pub const ENEMY_CORE: [f32; 4] = [0.18, 0.36, 0.61, 1.0];
pub const OVERLAY_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// CSS `rgba()` string for a canvas fill style
pub fn to_css(color: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        color[3].clamp(0.0, 1.0)
    )
}
