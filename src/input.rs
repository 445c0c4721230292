//! Pointer input sampling.
//!
//! The scroller only ever asks two questions: is the pointer down, and where
//! is it in world space. Mouse and touch platforms answer them differently,
//! so each gets its own backend behind [`InputSampler`]. The host feeds raw
//! platform events in as [`PointerEvent`]s.

use crate::camera::CameraView;
use glam::Vec2;

/// Platform-neutral pointer event, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    ButtonPressed,
    ButtonReleased,
    CursorMoved(Vec2),
    TouchStarted { id: u64, position: Vec2 },
    TouchMoved { id: u64, position: Vec2 },
    TouchEnded { id: u64 },
    /// Every button and finger is up, e.g. the window lost focus mid-drag
    Cancelled,
}

/// Source of pointer samples for the scroller
pub trait InputSampler {
    fn currently_pressed(&self) -> bool;
    fn cursor_world_position(&self, view: &dyn CameraView) -> Vec2;
    fn handle_event(&mut self, event: &PointerEvent);
}

/// Mouse backend: pressed while the primary button is held
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pub cursor: Vec2,
    pub button_down: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSampler for PointerInput {
    fn currently_pressed(&self) -> bool {
        self.button_down
    }

    fn cursor_world_position(&self, view: &dyn CameraView) -> Vec2 {
        view.screen_to_world(self.cursor)
    }

    fn handle_event(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::ButtonPressed => self.button_down = true,
            PointerEvent::ButtonReleased | PointerEvent::Cancelled => self.button_down = false,
            PointerEvent::CursorMoved(position) => self.cursor = position,
            _ => {}
        }
    }
}

/// Touch backend: pressed while any finger is down, tracking the first one
#[derive(Debug, Clone, Default)]
pub struct TouchInput {
    /// Active touches in the order they started
    touches: Vec<(u64, Vec2)>,
}

impl TouchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn first_touch(&self) -> Option<Vec2> {
        self.touches.first().map(|&(_, position)| position)
    }
}

impl InputSampler for TouchInput {
    fn currently_pressed(&self) -> bool {
        !self.touches.is_empty()
    }

    fn cursor_world_position(&self, view: &dyn CameraView) -> Vec2 {
        view.screen_to_world(self.first_touch().unwrap_or(Vec2::ZERO))
    }

    fn handle_event(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::TouchStarted { id, position } => {
                // A repeated start for a live id just moves it
                if let Some(touch) = self.touches.iter_mut().find(|(t, _)| *t == id) {
                    touch.1 = position;
                } else {
                    self.touches.push((id, position));
                }
            }
            PointerEvent::TouchMoved { id, position } => {
                if let Some(touch) = self.touches.iter_mut().find(|(t, _)| *t == id) {
                    touch.1 = position;
                }
            }
            PointerEvent::TouchEnded { id } => {
                self.touches.retain(|(t, _)| *t != id);
            }
            PointerEvent::Cancelled => self.touches.clear(),
            _ => {}
        }
    }
}

/// What the running platform can do, decided once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Touch is the primary input. A compile-time stand-in for mobile targets:
    /// desktop touchscreens report false and get the pointer backend, which
    /// relies on the OS emulating mouse input for touches.
    pub touch_supported: bool,
    /// Running inside an interactive development build, where the mouse stands in for touch.
    /// `detect` only sets it off mobile, so it matters for hand-built capabilities.
    pub interactive_editor: bool,
}

impl PlatformCapabilities {
    /// Capabilities of the compile target: mobile targets get touch, everything
    /// else the pointer. Debug desktop builds are flagged as development builds.
    pub fn detect() -> Self {
        Self {
            touch_supported: cfg!(any(target_os = "android", target_os = "ios")),
            interactive_editor: cfg!(debug_assertions)
                && !cfg!(any(target_os = "android", target_os = "ios")),
        }
    }

    pub fn prefers_touch(&self) -> bool {
        self.touch_supported && !self.interactive_editor
    }
}

/// Pick the input backend for the platform
pub fn select_input(capabilities: PlatformCapabilities) -> Box<dyn InputSampler> {
    if capabilities.prefers_touch() {
        log::debug!("Using touch input backend");
        Box::new(TouchInput::new())
    } else {
        log::debug!("Using pointer input backend");
        Box::new(PointerInput::new())
    }
}
