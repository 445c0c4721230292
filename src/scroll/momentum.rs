//! Drift phase: the released camera coasts on its last drag velocity.

use super::config::ScrollConfig;
use super::state::ScrollState;
use crate::camera::CameraView;
use crate::constants::*;

/// Per-tick velocity decay factor, `exp(-elapsed / (1 - drag))`.
///
/// The decay constant is `1 - drag`: drag close to 1 stops almost at once,
/// drag close to 0 barely slows down. Drag at or above 1 leaves no time
/// constant, so any positive elapsed time stops the camera outright.
pub fn drag_multiplier(elapsed: f32, drag: f32) -> f32 {
    let elapsed = elapsed.max(0.0);
    let time_constant = 1.0 - drag.min(1.0);

    if time_constant <= 0.0 {
        return if elapsed > 0.0 { 0.0 } else { 1.0 };
    }

    (-elapsed / time_constant).exp()
}

/// Runs the decaying drift after a release
#[derive(Debug, Clone)]
pub struct MomentumIntegrator {
    last_tick_time: f32,
}

impl MomentumIntegrator {
    pub fn new(start_time: f32) -> Self {
        Self {
            last_tick_time: start_time,
        }
    }

    /// One fixed tick of drift. Returns the decay multiplier applied.
    pub fn step(
        &mut self,
        now: f32,
        state: &mut ScrollState,
        config: &ScrollConfig,
        camera: &mut dyn CameraView,
    ) -> f32 {
        let elapsed = now - self.last_tick_time;
        self.last_tick_time = now;

        let multiplier = drag_multiplier(elapsed, config.drag);
        state.velocity *= multiplier;
        if state.velocity.length() < REST_VELOCITY_EPSILON {
            state.velocity = glam::Vec2::ZERO;
        }

        let mut position = camera.position() - state.velocity;

        let limits = config.limits();
        if limits.any_enabled() {
            state.velocity =
                limits.apply_bounce_clamp(&mut position, state.velocity, multiplier, config.bounce_power);
        }

        camera.set_position(position);
        multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrthoCamera;
    use glam::Vec2;
    use rand::Rng;

    fn drifting(velocity: Vec2) -> ScrollState {
        ScrollState {
            velocity,
            enabled: true,
            ..ScrollState::default()
        }
    }

    #[test]
    fn test_multiplier_matches_formula() {
        let m = drag_multiplier(0.1, 0.5);
        assert!((m - (-0.2f32).exp()).abs() < 1e-6);
        assert!((m - 0.8187).abs() < 1e-4);
    }

    #[test]
    fn test_multiplier_zero_elapsed_is_one() {
        assert_eq!(drag_multiplier(0.0, 0.3), 1.0);
        assert_eq!(drag_multiplier(0.0, 1.0), 1.0);
        assert_eq!(drag_multiplier(-0.5, 0.3), 1.0);
    }

    #[test]
    fn test_multiplier_full_drag_stops() {
        assert_eq!(drag_multiplier(0.02, 1.0), 0.0);
        assert_eq!(drag_multiplier(0.02, 1.5), 0.0);
    }

    #[test]
    fn test_higher_drag_decays_faster() {
        assert!(drag_multiplier(0.02, 0.9) < drag_multiplier(0.02, 0.1));
    }

    #[test]
    fn test_multiplier_in_unit_interval() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let elapsed: f32 = rng.gen_range(0.0..5.0);
            let drag: f32 = rng.gen_range(0.001..0.999);
            let m = drag_multiplier(elapsed, drag);
            assert!(m > 0.0 || elapsed / (1.0 - drag) > 80.0, "m={} e={} d={}", m, elapsed, drag);
            assert!(m <= 1.0);
        }
    }

    #[test]
    fn test_first_tick_after_release() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        let mut state = drifting(Vec2::new(2.0, 0.0));
        let config = ScrollConfig {
            drag: 0.5,
            ..ScrollConfig::default()
        };
        let mut integrator = MomentumIntegrator::new(1.0);

        integrator.step(1.1, &mut state, &config, &mut camera);

        let expected = 2.0 * (-0.2f32).exp();
        assert!((state.velocity.x - expected).abs() < 1e-4);
        assert!((state.velocity.x - 1.637).abs() < 1e-3);
        assert!((camera.position.x + expected).abs() < 1e-4);
        assert_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn test_speed_never_increases() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut camera = OrthoCamera::new(800.0, 600.0);
            let mut state = drifting(Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)));
            let config = ScrollConfig {
                drag: rng.gen_range(0.01..0.99),
                ..ScrollConfig::default()
            };
            let mut integrator = MomentumIntegrator::new(0.0);
            let mut now = 0.0;
            let mut speed = state.velocity.length();
            for _ in 0..100 {
                now += rng.gen_range(0.0..0.05);
                integrator.step(now, &mut state, &config, &mut camera);
                let next = state.velocity.length();
                assert!(next <= speed);
                speed = next;
            }
        }
    }

    #[test]
    fn test_bounce_at_right_limit() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        camera.position = Vec2::new(5.5, 0.0);
        // Moving further right (camera position -= velocity)
        let mut state = drifting(Vec2::new(-0.5, 0.0));
        let config = ScrollConfig {
            drag: 0.5,
            do_limit_horizontal: true,
            limit_left: -5.0,
            limit_right: 5.0,
            bounce_power: 0.4,
            ..ScrollConfig::default()
        };
        let mut integrator = MomentumIntegrator::new(0.0);

        let m = integrator.step(0.1, &mut state, &config, &mut camera);

        let decayed = -0.5 * m;
        let unclamped = 5.5 - decayed;
        let eased = unclamped + (5.0 - unclamped) * 0.4;
        assert!((camera.position.x - eased).abs() < 1e-5);
        assert!((state.velocity.x - decayed * m).abs() < 1e-6);
    }

    #[test]
    fn test_inbound_drift_past_right_limit_eases_back() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        camera.position = Vec2::new(5.5, 0.0);
        // Already heading back toward the box
        let mut state = drifting(Vec2::new(0.1, 0.0));
        let config = ScrollConfig {
            drag: 0.5,
            do_limit_horizontal: true,
            limit_left: -5.0,
            limit_right: 5.0,
            bounce_power: 0.4,
            ..ScrollConfig::default()
        };
        let mut integrator = MomentumIntegrator::new(0.0);

        let m = integrator.step(0.1, &mut state, &config, &mut camera);

        assert!((m - 0.818_730_8).abs() < 1e-6);
        assert!((camera.position.x - 5.250_876).abs() < 1e-5);
        assert_eq!(camera.position.y, 0.0);
        assert!((state.velocity.x - 0.067_032).abs() < 1e-5);
        assert!(camera.position.x < 5.5 && camera.position.x > 5.0);
    }

    #[test]
    fn test_settles_inside_limits() {
        let mut rng = rand::thread_rng();
        let config = ScrollConfig {
            drag: 0.6,
            do_limit_horizontal: true,
            limit_left: -4.0,
            limit_right: 4.0,
            do_limit_vertical: true,
            limit_top: 3.0,
            limit_bottom: -3.0,
            bounce_power: 0.2,
            ..ScrollConfig::default()
        };
        let limits = config.limits();

        for _ in 0..20 {
            let mut camera = OrthoCamera::new(800.0, 600.0);
            camera.position = Vec2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
            let mut state = drifting(Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)));
            let mut integrator = MomentumIntegrator::new(0.0);

            for tick in 1..=2000 {
                integrator.step(tick as f32 * FIXED_TIMESTEP, &mut state, &config, &mut camera);
            }

            let settled = limits.clamp(camera.position);
            assert!(
                (camera.position - settled).length() < 1e-3,
                "camera {:?} outside limits",
                camera.position
            );
        }
    }

    #[test]
    fn test_tiny_velocity_snaps_to_rest() {
        let mut camera = OrthoCamera::new(800.0, 600.0);
        let mut state = drifting(Vec2::new(1.0e-6, 0.0));
        let mut integrator = MomentumIntegrator::new(0.0);
        integrator.step(0.02, &mut state, &ScrollConfig::default(), &mut camera);
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(camera.position, Vec2::ZERO);
    }
}
