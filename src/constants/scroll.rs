//! Drag-scroll and momentum constants.

/// Weight of the newest velocity sample in the drag smoothing filter
pub const SMOOTHING_CURRENT_WEIGHT: f32 = 0.8;
/// Weight of the previous smoothed velocity in the drag smoothing filter
pub const SMOOTHING_PREVIOUS_WEIGHT: f32 = 0.2;
/// Blend back toward the previous velocity when a sample decelerates
pub const DECELERATION_BLEND: f32 = 0.5;

/// Upper bound for off-limit drag friction
pub const MAX_OFF_LIMIT_FRICTION: f32 = 0.3;
/// Smallest drag value accepted after sanitizing (drag must stay above zero)
pub const MIN_DRAG: f32 = 0.001;
/// Velocity magnitude below which a drift is considered at rest
pub const REST_VELOCITY_EPSILON: f32 = 1.0e-5;

/// Default momentum decay parameter
pub const DEFAULT_DRAG: f32 = 0.5;
/// Default share of the overshoot corrected per bounce tick
pub const DEFAULT_BOUNCE_POWER: f32 = 0.1;
/// Default drag resistance past the limits
pub const DEFAULT_OFF_LIMIT_FRICTION: f32 = 0.1;
/// Default half-extent of the limit box (world units)
pub const DEFAULT_LIMIT_EXTENT: f32 = 10.0;
