//! Frame driver
//!
//! Glue between a host loop (requestAnimationFrame, a headless loop, a test)
//! and the simulation: one `frame` call per rendered frame runs exactly one
//! tick and hands back a read-only snapshot.

use super::autopilot;
use super::input::InputCollector;
use super::time::FrameClock;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, tick};
use crate::tuning::Tuning;

pub struct FrameDriver {
    state: GameState,
    input: InputCollector,
    clock: FrameClock,
    /// Autopilot plays instead of the held keys
    demo: bool,
    /// Events from the last simulated frame
    events: Vec<GameEvent>,
    kills: u64,
}

impl FrameDriver {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!(
            "Session starting with seed {} on a {}x{} field",
            seed,
            tuning.field.width,
            tuning.field.height
        );
        Self {
            state: GameState::new(tuning, seed),
            input: InputCollector::new(),
            clock: FrameClock::new(),
            demo: false,
            events: Vec::new(),
            kills: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut InputCollector {
        &mut self.input
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    pub fn set_demo(&mut self, demo: bool) {
        if self.demo != demo {
            log::info!("Demo mode: {}", demo);
        }
        self.demo = demo;
    }

    /// Events produced by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Enemies destroyed since the last reset
    pub fn kills(&self) -> u64 {
        self.kills
    }

    /// Run one tick for the frame at `timestamp_ms` and snapshot the result
    pub fn frame(&mut self, timestamp_ms: f64) -> Snapshot {
        let dt_ms = self.clock.advance(timestamp_ms);

        if self.input.take_demo_toggle() {
            self.set_demo(!self.demo);
        }

        let mut input = self.input.take_tick_input(timestamp_ms);
        if self.demo && self.state.phase == GamePhase::Playing {
            autopilot::steer(&self.state.snapshot(), &mut input);
        }

        let was_over = self.state.phase == GamePhase::GameOver;
        tick(&mut self.state, &input, dt_ms);
        if was_over && self.state.phase == GamePhase::Playing {
            self.kills = 0;
        }

        self.events = std::mem::take(&mut self.state.events);
        for event in &self.events {
            match *event {
                GameEvent::EnemyDestroyed { .. } => self.kills += 1,
                GameEvent::GameOver { score } => log::info!(
                    "Run over after {} ticks ({:.1} s): score {}, {} kills",
                    self.state.time_ticks,
                    self.state.elapsed_ms / 1000.0,
                    score,
                    self.kills
                ),
                _ => {}
            }
        }

        self.state.snapshot()
    }
}
