//! Keyboard input collection
//!
//! Held keys are level-triggered: they stay down until released. Triggers
//! are edge-triggered: each press is handed to exactly one tick.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys whose state is read every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldKey {
    MoveLeft,
    MoveRight,
    Fire,
}

/// One-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    TogglePause,
    Reset,
    /// Autopilot on/off, handled by the driver rather than the simulation
    ToggleDemo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Hold(HeldKey),
    Trigger(Trigger),
}

/// Map a browser `KeyboardEvent.key` value to a game action
pub fn map_key(key: &str) -> Option<KeyAction> {
    let action = match key {
        "ArrowLeft" | "a" | "A" => KeyAction::Hold(HeldKey::MoveLeft),
        "ArrowRight" | "d" | "D" => KeyAction::Hold(HeldKey::MoveRight),
        " " | "Spacebar" => KeyAction::Hold(HeldKey::Fire),
        "p" | "P" | "Escape" => KeyAction::Trigger(Trigger::TogglePause),
        "r" | "R" => KeyAction::Trigger(Trigger::Reset),
        "i" | "I" => KeyAction::Trigger(Trigger::ToggleDemo),
        _ => return None,
    };
    Some(action)
}

/// Collects key events between frames
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    held: HashSet<HeldKey>,
    toggle_pause: bool,
    reset: bool,
    toggle_demo: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown; returns true if the key means something to the game
    ///
    /// Auto-repeat presses keep held keys down but never re-fire a trigger.
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        match map_key(key) {
            Some(KeyAction::Hold(k)) => {
                self.press(k);
                true
            }
            Some(KeyAction::Trigger(t)) => {
                if !repeat {
                    self.trigger(t);
                }
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(KeyAction::Hold(k)) = map_key(key) {
            self.release(k);
        }
    }

    pub fn press(&mut self, key: HeldKey) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: HeldKey) {
        self.held.remove(&key);
    }

    /// Drop every held key (window lost focus, keyups will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: HeldKey) -> bool {
        self.held.contains(&key)
    }

    /// Queue a trigger; several presses before the next tick count once
    pub fn trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::TogglePause => self.toggle_pause = true,
            Trigger::Reset => self.reset = true,
            Trigger::ToggleDemo => self.toggle_demo = true,
        }
    }

    /// Build this tick's intents, consuming pending pause/reset triggers
    pub fn take_tick_input(&mut self, now_ms: f64) -> TickInput {
        let input = TickInput {
            move_left: self.is_held(HeldKey::MoveLeft),
            move_right: self.is_held(HeldKey::MoveRight),
            fire: self.is_held(HeldKey::Fire),
            toggle_pause: self.toggle_pause,
            reset: self.reset,
            now_ms,
        };
        self.toggle_pause = false;
        self.reset = false;
        input
    }

    /// Consume a pending demo toggle
    pub fn take_demo_toggle(&mut self) -> bool {
        std::mem::take(&mut self.toggle_demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key("ArrowLeft"), Some(KeyAction::Hold(HeldKey::MoveLeft)));
        assert_eq!(map_key(" "), Some(KeyAction::Hold(HeldKey::Fire)));
        assert_eq!(map_key("p"), Some(KeyAction::Trigger(Trigger::TogglePause)));
        assert_eq!(map_key("R"), Some(KeyAction::Trigger(Trigger::Reset)));
        assert_eq!(map_key("Tab"), None);
    }

    #[test]
    fn test_held_keys_persist_across_ticks() {
        let mut input = InputCollector::new();
        assert!(input.key_down("ArrowRight", false));
        assert!(input.key_down(" ", false));

        let first = input.take_tick_input(0.0);
        let second = input.take_tick_input(16.0);
        assert!(first.move_right && first.fire);
        assert!(second.move_right && second.fire);
        assert_eq!(second.now_ms, 16.0);

        input.key_up("ArrowRight");
        let third = input.take_tick_input(32.0);
        assert!(!third.move_right);
        assert!(third.fire);
    }

    #[test]
    fn test_triggers_are_consumed_once() {
        let mut input = InputCollector::new();
        input.key_down("p", false);
        input.key_down("r", false);

        let first = input.take_tick_input(0.0);
        assert!(first.toggle_pause && first.reset);

        let second = input.take_tick_input(16.0);
        assert!(!second.toggle_pause && !second.reset);
    }

    #[test]
    fn test_auto_repeat_does_not_retrigger() {
        let mut input = InputCollector::new();
        input.key_down("p", false);
        input.take_tick_input(0.0);
        input.key_down("p", true);
        input.key_down("p", true);
        assert!(!input.take_tick_input(16.0).toggle_pause);
    }

    #[test]
    fn test_double_press_before_tick_counts_once() {
        let mut input = InputCollector::new();
        input.key_down("p", false);
        input.key_down("p", false);
        assert!(input.take_tick_input(0.0).toggle_pause);
        assert!(!input.take_tick_input(16.0).toggle_pause);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputCollector::new();
        input.key_down("ArrowLeft", false);
        input.key_down(" ", false);
        input.release_all();
        let tick = input.take_tick_input(0.0);
        assert!(!tick.move_left && !tick.fire);
    }

    #[test]
    fn test_demo_toggle_is_separate_from_tick_input() {
        let mut input = InputCollector::new();
        input.key_down("i", false);
        let tick = input.take_tick_input(0.0);
        assert!(!tick.toggle_pause && !tick.reset);
        assert!(input.take_demo_toggle());
        assert!(!input.take_demo_toggle());
    }
}
