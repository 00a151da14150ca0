// src/animation/ticker.rs
//
// Turns the host's variable frame deltas into fixed animation ticks.

/// Seconds between animation ticks (20 Hz).
pub const TICK_INTERVAL: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct Ticker {
    frame_timer: f32,
    frame_duration: f32,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker {
    pub fn new(frame_duration: f32) -> Self {
        Self {
            frame_timer: 0.0,
            frame_duration,
        }
    }

    /// True when a tick is due. Fires at most once per call; the backlog of
    /// a long stall is dropped.
    pub fn update(&mut self, dt: f32) -> bool {
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            if self.frame_timer >= self.frame_duration {
                self.frame_timer = 0.0;
            }
            true
        } else {
            false
        }
    }
}
