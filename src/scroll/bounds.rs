//! Limit box for the camera: edge resistance while dragging, soft bounce while drifting.

use glam::Vec2;

/// Rectangular region the camera position is kept in, per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLimits {
    pub horizontal: bool,
    pub left: f32,
    pub right: f32,
    pub vertical: bool,
    pub top: f32,
    pub bottom: f32,
}

impl ScrollLimits {
    pub fn any_enabled(&self) -> bool {
        self.horizontal || self.vertical
    }

    /// Nearest position inside the enabled limits.
    ///
    /// Inverted pairs don't panic; the upper bound wins.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        let mut clamped = position;
        if self.horizontal {
            clamped.x = clamped.x.max(self.left).min(self.right);
        }
        if self.vertical {
            clamped.y = clamped.y.max(self.bottom).min(self.top);
        }
        clamped
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.clamp(position) == position
    }

    /// Soften a drag delta that would carry the camera past a limit.
    ///
    /// The camera moves by `-delta`, so the prospective position is
    /// `position - delta`. Each overshooting edge pulls its axis of the delta
    /// toward zero by `overshoot * friction`.
    pub fn apply_drag_friction(&self, position: Vec2, delta: Vec2, friction: f32) -> Vec2 {
        let next = position - delta;
        let mut delta = delta;

        if self.horizontal {
            if next.x > self.right {
                delta.x = lerp(delta.x, 0.0, (next.x - self.right) * friction);
            }
            if next.x < self.left {
                delta.x = lerp(delta.x, 0.0, (self.left - next.x) * friction);
            }
        }
        if self.vertical {
            if next.y > self.top {
                delta.y = lerp(delta.y, 0.0, (next.y - self.top) * friction);
            }
            if next.y < self.bottom {
                delta.y = lerp(delta.y, 0.0, (self.bottom - next.y) * friction);
            }
        }

        delta
    }

    /// Pull an out-of-bounds camera back toward the box and bleed off velocity.
    ///
    /// Returns the new velocity. When the position is already inside, both
    /// position and velocity are untouched.
    pub fn apply_bounce_clamp(
        &self,
        position: &mut Vec2,
        velocity: Vec2,
        drag_multiplier: f32,
        bounce_power: f32,
    ) -> Vec2 {
        let clamped = self.clamp(*position);
        if clamped == *position {
            return velocity;
        }

        *position = position.lerp(clamped, bounce_power.clamp(0.0, 1.0));
        velocity * drag_multiplier
    }
}

/// Linear interpolation with the weight clamped to [0, 1]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
