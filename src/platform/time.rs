//! Frame timing
//!
//! Turns the frame driver's timestamps into per-frame `dt` values.

use crate::consts::MAX_FRAME_DT_MS;

/// Tracks the previous frame timestamp
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt_ms: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT_MS)
    }

    pub fn with_max_dt(max_dt_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_dt_ms,
        }
    }

    /// Time since the previous frame (ms), capped at the max step
    ///
    /// The first frame is zero-length. A timestamp that goes backwards or
    /// isn't finite also yields zero and doesn't move the clock back.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) if timestamp_ms > last => timestamp_ms - last,
            Some(_) => return 0.0,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        (dt as f32).min(self.max_dt_ms)
    }

    /// Forget the previous frame, so the next one is zero-length
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}
