//! Inertial drag scrolling for a 2D camera.
//!
//! A press starts a drag in which the camera tracks the pointer. Releasing
//! hands the smoothed drag velocity to a drift that decays it every fixed
//! tick, optionally bouncing off the configured limits. The next press ends
//! the drift and the cycle starts over.
//!
//! The host drives two cadences: [`InertialScroller::update`] once per
//! rendered frame (press detection and dragging) and
//! [`InertialScroller::fixed_update`] once per fixed physics step (drifting).

mod bounds;
mod config;
mod drag;
mod momentum;
mod state;

pub use bounds::ScrollLimits;
pub use config::{AxisMode, ConfigError, ConfigWarning, ScrollConfig};
pub use drag::{mask_axis, smooth_velocity, DragTracker};
pub use momentum::{drag_multiplier, MomentumIntegrator};
pub use state::ScrollState;

use crate::camera::CameraView;
use crate::input::InputSampler;
use glam::Vec2;
use std::fmt;

/// Where the scroll cycle currently is
#[derive(Debug, Clone)]
pub enum ScrollPhase {
    /// Waiting for a press
    Idle,
    Dragging(DragTracker),
    Drifting(MomentumIntegrator),
}

/// Phase without its payload, for display and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Disabled,
    Idle,
    Dragging,
    Drifting,
}

impl PhaseKind {
    pub fn name(&self) -> &'static str {
        match self {
            PhaseKind::Disabled => "Disabled",
            PhaseKind::Idle => "Idle",
            PhaseKind::Dragging => "Dragging",
            PhaseKind::Drifting => "Drifting",
        }
    }
}

/// Problems noticed when the scroller starts. None of them stop it.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupWarning {
    NotOrthographic,
    Config(ConfigWarning),
}

impl fmt::Display for StartupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupWarning::NotOrthographic => write!(
                f,
                "camera is not orthographic; drag scrolling will not track the pointer exactly"
            ),
            StartupWarning::Config(warning) => write!(f, "{}", warning),
        }
    }
}

/// The drag/drift state machine
#[derive(Debug, Clone)]
pub struct InertialScroller {
    config: ScrollConfig,
    state: ScrollState,
    phase: ScrollPhase,
}

impl InertialScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::new(),
            phase: ScrollPhase::Idle,
        }
    }

    /// Initialize against the host camera. Logs and returns any warnings,
    /// then enables the cycle if `auto_enable` is set.
    pub fn start(&mut self, camera: &dyn CameraView) -> Vec<StartupWarning> {
        let mut warnings = Vec::new();

        if !camera.is_orthographic() {
            warnings.push(StartupWarning::NotOrthographic);
        }
        warnings.extend(self.config.validate().into_iter().map(StartupWarning::Config));

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        if self.config.auto_enable {
            self.enable();
        }

        warnings
    }

    /// Start the cycle. No-op if already running.
    pub fn enable(&mut self) {
        if self.state.enabled {
            return;
        }
        self.state.enabled = true;
        self.phase = ScrollPhase::Idle;
        log::debug!("Scroller enabled");
    }

    /// Stop whatever phase is active. Camera and velocity stay as they are.
    pub fn disable(&mut self) {
        if !self.state.enabled {
            return;
        }
        self.state.enabled = false;
        self.phase = ScrollPhase::Idle;
        log::debug!("Scroller disabled (velocity frozen at {:?})", self.state.velocity);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn phase(&self) -> &ScrollPhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        if !self.state.enabled {
            return PhaseKind::Disabled;
        }
        match self.phase {
            ScrollPhase::Idle => PhaseKind::Idle,
            ScrollPhase::Dragging(_) => PhaseKind::Dragging,
            ScrollPhase::Drifting(_) => PhaseKind::Drifting,
        }
    }

    /// Current motion: the live drag estimate while dragging, the drift velocity otherwise
    pub fn velocity(&self) -> Vec2 {
        match &self.phase {
            ScrollPhase::Dragging(tracker) if self.state.enabled => tracker.smoothed_velocity(),
            _ => self.state.velocity,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Live edits take effect on the next tick
    pub fn config_mut(&mut self) -> &mut ScrollConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        for warning in config.validate() {
            log::warn!("{}", warning);
        }
        self.config = config;
    }

    /// Frame tick: wait for a press, then track the drag until release.
    pub fn update(&mut self, now: f32, camera: &mut dyn CameraView, input: &dyn InputSampler) {
        puffin::profile_function!();

        if !self.state.enabled {
            return;
        }

        let pressed = input.currently_pressed();
        let next = match &mut self.phase {
            ScrollPhase::Idle if pressed => {
                self.state
                    .record_sample(input.cursor_world_position(&*camera), now);
                log::debug!("Press at {:?}, dragging", self.state.last_sample_position);
                Some(ScrollPhase::Dragging(DragTracker::new()))
            }
            ScrollPhase::Idle => None,
            ScrollPhase::Dragging(tracker) if pressed => {
                tracker.step(now, &mut self.state, &self.config, camera, input);
                None
            }
            ScrollPhase::Dragging(tracker) => {
                self.state.velocity = tracker.smoothed_velocity();
                log::debug!(
                    "Released after {} ticks, drifting at {:?}",
                    tracker.ticks(),
                    self.state.velocity
                );
                Some(ScrollPhase::Drifting(MomentumIntegrator::new(now)))
            }
            // Drifting advances on the fixed tick only
            ScrollPhase::Drifting(_) => None,
        };

        if let Some(next) = next {
            self.phase = next;
        }
    }

    /// Fixed tick: advance the drift, or end it when the pointer goes down.
    pub fn fixed_update(&mut self, now: f32, camera: &mut dyn CameraView, input: &dyn InputSampler) {
        puffin::profile_function!();

        if !self.state.enabled {
            return;
        }

        let ScrollPhase::Drifting(integrator) = &mut self.phase else {
            return;
        };

        if input.currently_pressed() {
            log::debug!("Drift interrupted by press");
            self.phase = ScrollPhase::Idle;
            return;
        }

        integrator.step(now, &mut self.state, &self.config, camera);
    }
}

impl Default for InertialScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}
