//! Heads-up display text

use crate::sim::{GamePhase, HudSnapshot};

/// Strings for the HUD elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub health: String,
    pub shield: String,
    pub score: String,
}

impl HudText {
    pub fn from_snapshot(hud: &HudSnapshot) -> Self {
        Self {
            health: format!("{}%", hud.health),
            shield: format!("{}%", hud.shield),
            score: format!("Score: {}", hud.score),
        }
    }
}

/// Centered overlay lines for the current phase: (text, font size in px)
pub fn overlay_lines(phase: GamePhase) -> &'static [(&'static str, f32)] {
    match phase {
        GamePhase::Playing => &[],
        GamePhase::Paused => &[("PAUSED", 48.0)],
        GamePhase::GameOver => &[("GAME OVER", 48.0), ("Press R to restart", 24.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_text() {
        let hud = HudSnapshot {
            score: 120,
            health: 80,
            shield: 0,
            phase: GamePhase::Playing,
        };
        let text = HudText::from_snapshot(&hud);
        assert_eq!(text.health, "80%");
        assert_eq!(text.shield, "0%");
        assert_eq!(text.score, "Score: 120");
    }

    #[test]
    fn test_overlay_per_phase() {
        assert!(overlay_lines(GamePhase::Playing).is_empty());
        assert_eq!(overlay_lines(GamePhase::Paused)[0].0, "PAUSED");
        assert_eq!(overlay_lines(GamePhase::GameOver).len(), 2);
    }
}
