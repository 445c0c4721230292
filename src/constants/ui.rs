//! UI and window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Default width of the inspector window
pub const INSPECTOR_WIDTH: f32 = 260.0;
/// Address the puffin profiler server binds to when profiling is on
pub const PROFILER_ADDR: &str = "127.0.0.1:8585";
/// Environment variable that turns profiling on
pub const PROFILE_ENV_VAR: &str = "FLICK_PROFILE";
