//! Mutable scroll state carried across ticks.

use glam::Vec2;

/// State owned by the scroller and handed to whichever phase is active
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Release velocity, in world units per tick. Decays during the drift.
    pub velocity: Vec2,
    pub enabled: bool,
    /// World position of the pointer at the previous sample
    pub last_sample_position: Vec2,
    /// Host time (seconds) of the previous sample
    pub last_sample_time: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a pointer sample as the reference for the next drag tick
    pub fn record_sample(&mut self, position: Vec2, time: f32) {
        self.last_sample_position = position;
        self.last_sample_time = time;
    }
}
