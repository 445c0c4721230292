//! 2D camera and the view interface the scroller drives.

use crate::constants::*;
use glam::{Mat4, Vec2};

/// What the scroller needs from a camera: a world position it can read and
/// move, and a way to project screen coordinates into the world.
pub trait CameraView {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    /// Drag scrolling only tracks the finger exactly under an orthographic projection.
    fn is_orthographic(&self) -> bool;
    /// Screen pixels (origin top-left, y down) to world units (y up).
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// Camera projection mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Orthographic,
    /// Vertical field of view in radians
    Perspective { fov_y: f32 },
}

pub struct OrthoCamera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub projection: Projection,
}

impl OrthoCamera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
            projection: Projection::Orthographic,
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.viewport_width / (2.0 * self.zoom);
        let half_height = self.viewport_height / (2.0 * self.zoom);

        let left = self.position.x - half_width;
        let right = self.position.x + half_width;
        let bottom = self.position.y - half_height;
        let top = self.position.y + half_height;

        Mat4::orthographic_rh(left, right, bottom, top, CAMERA_NEAR_PLANE, CAMERA_FAR_PLANE)
    }

    /// Visible cell range (min_x, max_x, min_y, max_y), padded by one cell
    pub fn visible_bounds(&self) -> (i32, i32, i32, i32) {
        let half_width = self.viewport_width / (2.0 * self.zoom);
        let half_height = self.viewport_height / (2.0 * self.zoom);

        let min_x = (self.position.x - half_width).floor() as i32 - 1;
        let max_x = (self.position.x + half_width).ceil() as i32 + 1;
        let min_y = (self.position.y - half_height).floor() as i32 - 1;
        let max_y = (self.position.y + half_height).ceil() as i32 + 1;

        (min_x, max_x, min_y, max_y)
    }
}

impl CameraView for OrthoCamera {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic)
    }

    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let ndc_x = (screen.x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / self.viewport_height) * 2.0;

        let world_x = (ndc_x * self.viewport_width) / (2.0 * self.zoom) + self.position.x;
        let world_y = (ndc_y * self.viewport_height) / (2.0 * self.zoom) + self.position.y;

        Vec2::new(world_x, world_y)
    }
}
