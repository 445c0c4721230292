//! Drag phase: the camera follows the pointer while it is held down.

use super::config::{AxisMode, ScrollConfig};
use super::state::ScrollState;
use crate::camera::CameraView;
use crate::constants::*;
use crate::input::InputSampler;
use glam::Vec2;

/// Zero the axis the mode doesn't scroll
pub fn mask_axis(delta: Vec2, mode: AxisMode) -> Vec2 {
    match mode {
        AxisMode::XAndY => delta,
        AxisMode::XOnly => Vec2::new(delta.x, 0.0),
        AxisMode::YOnly => Vec2::new(0.0, delta.y),
    }
}

/// Fold one pointer delta into the running velocity estimate.
///
/// The `1 + elapsed` denominator keeps near-zero intervals finite. A sample
/// slower than the running estimate only pulls it halfway down, so one
/// sluggish frame right before release doesn't kill the flick.
pub fn smooth_velocity(previous: Vec2, delta: Vec2, elapsed: f32) -> Vec2 {
    let current = delta / (1.0 + elapsed);
    let smoothed = current * SMOOTHING_CURRENT_WEIGHT + previous * SMOOTHING_PREVIOUS_WEIGHT;

    if smoothed.length_squared() < previous.length_squared() {
        previous.lerp(smoothed, DECELERATION_BLEND)
    } else {
        smoothed
    }
}

/// Velocity tracking for one press-to-release drag
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    smoothed: Vec2,
    ticks: u32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity the drift will start with if the pointer is released now
    pub fn smoothed_velocity(&self) -> Vec2 {
        self.smoothed
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// One drag tick: estimate velocity, move the camera, roll the sample forward
    pub fn step(
        &mut self,
        now: f32,
        state: &mut ScrollState,
        config: &ScrollConfig,
        camera: &mut dyn CameraView,
        input: &dyn InputSampler,
    ) {
        let elapsed = (now - state.last_sample_time).max(0.0);
        let position = input.cursor_world_position(&*camera);
        let delta = mask_axis(position - state.last_sample_position, config.axis_mode);

        self.smoothed = smooth_velocity(self.smoothed, delta, elapsed);
        self.ticks += 1;

        let limits = config.limits();
        let delta = if limits.any_enabled() {
            limits.apply_drag_friction(camera.position(), delta, config.off_limit_friction)
        } else {
            delta
        };

        // Content follows the finger, so the camera goes the other way
        camera.set_position(camera.position() - delta);

        // Sample through the moved camera so a resting finger reads as no motion
        state.record_sample(input.cursor_world_position(&*camera), now);

        log::trace!(
            "drag tick: delta={:?} smoothed={:?} elapsed={:.4}",
            delta,
            self.smoothed,
            elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrthoCamera;
    use crate::input::{PointerEvent, PointerInput};

    /// Pointer that reports a fixed world position regardless of the camera
    struct WorldPointer {
        world: Vec2,
    }

    impl InputSampler for WorldPointer {
        fn currently_pressed(&self) -> bool {
            true
        }

        fn cursor_world_position(&self, _view: &dyn CameraView) -> Vec2 {
            self.world
        }

        fn handle_event(&mut self, _event: &PointerEvent) {}
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_mask_axis() {
        let delta = Vec2::new(3.0, -4.0);
        assert_eq!(mask_axis(delta, AxisMode::XAndY), delta);
        assert_eq!(mask_axis(delta, AxisMode::XOnly), Vec2::new(3.0, 0.0));
        assert_eq!(mask_axis(delta, AxisMode::YOnly), Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_first_sample_weighted() {
        let smoothed = smooth_velocity(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);
        assert_close(smoothed, Vec2::new(0.8, 0.0));
    }

    #[test]
    fn test_elapsed_damps_sample() {
        let smoothed = smooth_velocity(Vec2::ZERO, Vec2::new(2.0, 0.0), 1.0);
        // 2 / (1 + 1) * 0.8
        assert_close(smoothed, Vec2::new(0.8, 0.0));
    }

    #[test]
    fn test_deceleration_blends_halfway() {
        let previous = Vec2::new(1.0, 0.0);
        // Raw smoothed would be 0.2; blending back gives 0.6
        let smoothed = smooth_velocity(previous, Vec2::ZERO, 0.0);
        assert_close(smoothed, Vec2::new(0.6, 0.0));
    }

    #[test]
    fn test_acceleration_not_blended() {
        let previous = Vec2::new(1.0, 0.0);
        let smoothed = smooth_velocity(previous, Vec2::new(2.0, 0.0), 0.0);
        assert_close(smoothed, Vec2::new(1.8, 0.0));
    }

    #[test]
    fn test_constant_input_converges() {
        let velocity = Vec2::new(0.5, -0.25);
        let elapsed = 0.016;
        let mut smoothed = Vec2::ZERO;
        for _ in 0..60 {
            smoothed = smooth_velocity(smoothed, velocity, elapsed);
        }
        assert_close(smoothed, velocity / (1.0 + elapsed));
    }

    #[test]
    fn test_step_moves_camera_against_pointer() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        let mut state = ScrollState::new();
        let config = ScrollConfig::default();
        let mut tracker = DragTracker::new();

        state.record_sample(Vec2::ZERO, 0.0);
        let input = WorldPointer {
            world: Vec2::new(1.0, 0.0),
        };
        tracker.step(0.0, &mut state, &config, &mut camera, &input);

        assert_close(camera.position, Vec2::new(-1.0, 0.0));
        assert_close(tracker.smoothed_velocity(), Vec2::new(0.8, 0.0));
        assert_eq!(state.last_sample_position, Vec2::new(1.0, 0.0));
        assert_eq!(tracker.ticks(), 1);
    }

    #[test]
    fn test_step_respects_axis_mode() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        let mut state = ScrollState::new();
        let config = ScrollConfig {
            axis_mode: AxisMode::YOnly,
            ..ScrollConfig::default()
        };
        let mut tracker = DragTracker::new();

        let input = WorldPointer {
            world: Vec2::new(4.0, 2.0),
        };
        tracker.step(0.1, &mut state, &config, &mut camera, &input);

        assert_eq!(camera.position.x, 0.0);
        assert_close(camera.position, Vec2::new(0.0, -2.0));
        assert_eq!(tracker.smoothed_velocity().x, 0.0);
    }

    #[test]
    fn test_step_friction_past_limit() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        camera.position = Vec2::new(5.0, 0.0);
        let mut state = ScrollState::new();
        let config = ScrollConfig {
            do_limit_horizontal: true,
            limit_left: -5.0,
            limit_right: 5.0,
            off_limit_friction: 0.3,
            ..ScrollConfig::default()
        };
        let mut tracker = DragTracker::new();

        // Dragging the pointer left pushes the camera right, past the limit
        let input = WorldPointer {
            world: Vec2::new(-1.0, 0.0),
        };
        tracker.step(0.0, &mut state, &config, &mut camera, &input);

        assert_close(camera.position, Vec2::new(5.7, 0.0));
        // The velocity estimate sees the unresisted delta
        assert_close(tracker.smoothed_velocity(), Vec2::new(-0.8, 0.0));
    }

    #[test]
    fn test_resting_finger_over_real_camera_is_still() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        let mut state = ScrollState::new();
        let config = ScrollConfig::default();
        let mut tracker = DragTracker::new();
        let mut input = PointerInput::new();

        input.handle_event(&PointerEvent::CursorMoved(Vec2::new(400.0, 300.0)));
        state.record_sample(input.cursor_world_position(&camera), 0.0);

        // Finger moves 32 px right = 1 world unit at default zoom
        input.handle_event(&PointerEvent::CursorMoved(Vec2::new(432.0, 300.0)));
        tracker.step(0.016, &mut state, &config, &mut camera, &input);
        assert_close(camera.position, Vec2::new(-1.0, 0.0));

        // Finger holds still: no further movement
        tracker.step(0.032, &mut state, &config, &mut camera, &input);
        assert_close(camera.position, Vec2::new(-1.0, 0.0));
    }
}
