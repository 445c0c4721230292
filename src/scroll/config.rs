//! Scroller configuration and loading.

use super::bounds::ScrollLimits;
use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which axes the drag is allowed to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisMode {
    #[default]
    XAndY,
    XOnly,
    YOnly,
}

impl AxisMode {
    pub const ALL: [AxisMode; 3] = [AxisMode::XAndY, AxisMode::XOnly, AxisMode::YOnly];

    pub fn name(&self) -> &'static str {
        match self {
            AxisMode::XAndY => "X and Y",
            AxisMode::XOnly => "X only",
            AxisMode::YOnly => "Y only",
        }
    }
}

/// Tuning for drag scrolling, editable while the scroller runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Momentum decay parameter in (0, 1]; decay constant is `1 - drag`
    pub drag: f32,
    pub axis_mode: AxisMode,
    /// Start the scroll cycle as soon as the scroller is started
    pub auto_enable: bool,
    pub do_limit_horizontal: bool,
    pub limit_left: f32,
    pub limit_right: f32,
    pub do_limit_vertical: bool,
    pub limit_top: f32,
    pub limit_bottom: f32,
    /// Share of the overshoot corrected each bounce tick, in [0, 1]
    pub bounce_power: f32,
    /// Drag resistance per world unit past a limit, in [0, 0.3]
    pub off_limit_friction: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            drag: DEFAULT_DRAG,
            axis_mode: AxisMode::XAndY,
            auto_enable: true,
            do_limit_horizontal: false,
            limit_left: -DEFAULT_LIMIT_EXTENT,
            limit_right: DEFAULT_LIMIT_EXTENT,
            do_limit_vertical: false,
            limit_top: DEFAULT_LIMIT_EXTENT,
            limit_bottom: -DEFAULT_LIMIT_EXTENT,
            bounce_power: DEFAULT_BOUNCE_POWER,
            off_limit_friction: DEFAULT_OFF_LIMIT_FRICTION,
        }
    }
}

/// Failure to load a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A configuration value the scroller will tolerate but probably shouldn't get
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    DragOutOfRange(f32),
    BouncePowerOutOfRange(f32),
    FrictionOutOfRange(f32),
    HorizontalLimitsInverted { left: f32, right: f32 },
    VerticalLimitsInverted { bottom: f32, top: f32 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::DragOutOfRange(v) => write!(f, "drag {} is outside (0, 1]", v),
            ConfigWarning::BouncePowerOutOfRange(v) => {
                write!(f, "bounce power {} is outside [0, 1]", v)
            }
            ConfigWarning::FrictionOutOfRange(v) => write!(
                f,
                "off-limit friction {} is outside [0, {}]",
                v, MAX_OFF_LIMIT_FRICTION
            ),
            ConfigWarning::HorizontalLimitsInverted { left, right } => {
                write!(f, "horizontal limits inverted: left {} > right {}", left, right)
            }
            ConfigWarning::VerticalLimitsInverted { bottom, top } => {
                write!(f, "vertical limits inverted: bottom {} > top {}", bottom, top)
            }
        }
    }
}

impl ScrollConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn limits(&self) -> ScrollLimits {
        ScrollLimits {
            horizontal: self.do_limit_horizontal,
            left: self.limit_left,
            right: self.limit_right,
            vertical: self.do_limit_vertical,
            top: self.limit_top,
            bottom: self.limit_bottom,
        }
    }

    /// Everything questionable about this configuration. Never fatal.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !(self.drag > 0.0 && self.drag <= 1.0) {
            warnings.push(ConfigWarning::DragOutOfRange(self.drag));
        }
        if !(0.0..=1.0).contains(&self.bounce_power) {
            warnings.push(ConfigWarning::BouncePowerOutOfRange(self.bounce_power));
        }
        if !(0.0..=MAX_OFF_LIMIT_FRICTION).contains(&self.off_limit_friction) {
            warnings.push(ConfigWarning::FrictionOutOfRange(self.off_limit_friction));
        }
        if self.do_limit_horizontal && self.limit_left > self.limit_right {
            warnings.push(ConfigWarning::HorizontalLimitsInverted {
                left: self.limit_left,
                right: self.limit_right,
            });
        }
        if self.do_limit_vertical && self.limit_bottom > self.limit_top {
            warnings.push(ConfigWarning::VerticalLimitsInverted {
                bottom: self.limit_bottom,
                top: self.limit_top,
            });
        }

        warnings
    }

    /// Copy with scalar tunables clamped into their ranges. Limit ordering is left alone.
    pub fn sanitized(&self) -> Self {
        Self {
            drag: if self.drag.is_nan() {
                DEFAULT_DRAG
            } else {
                self.drag.clamp(MIN_DRAG, 1.0)
            },
            bounce_power: self.bounce_power.clamp(0.0, 1.0),
            off_limit_friction: self.off_limit_friction.clamp(0.0, MAX_OFF_LIMIT_FRICTION),
            ..self.clone()
        }
    }
}
