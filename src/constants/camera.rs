//! Camera-related constants.

/// Default zoom level (pixels per world unit)
pub const CAMERA_DEFAULT_ZOOM: f32 = 32.0;
/// Near clip plane of the orthographic projection
pub const CAMERA_NEAR_PLANE: f32 = -1.0;
/// Far clip plane of the orthographic projection
pub const CAMERA_FAR_PLANE: f32 = 1.0;
