//! Inertial drag scrolling for 2D orthographic cameras.
//!
//! Press and drag to move the camera with the pointer; let go and it keeps
//! coasting on a decaying velocity, optionally bouncing softly off a limit box.
//! See [`scroll::InertialScroller`] for the state machine and
//! [`input::InputSampler`] / [`camera::CameraView`] for the host seams.

pub mod camera;
pub mod constants;
pub mod input;
pub mod scroll;

pub use camera::{CameraView, OrthoCamera, Projection};
pub use input::{select_input, InputSampler, PlatformCapabilities, PointerEvent, PointerInput, TouchInput};
pub use scroll::{
    AxisMode, ConfigError, ConfigWarning, InertialScroller, PhaseKind, ScrollConfig, ScrollLimits,
    StartupWarning,
};
