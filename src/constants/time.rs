//! Tick cadence constants for the demo host.

/// Fixed physics step in seconds (50 Hz)
pub const FIXED_TIMESTEP: f32 = 0.02;
/// Cap on fixed steps run in a single frame so a stall doesn't spiral
pub const MAX_FIXED_STEPS_PER_FRAME: u32 = 5;
/// Frame time cap (seconds) applied before feeding the fixed-step accumulator
pub const MAX_FRAME_DT: f32 = 0.25;
