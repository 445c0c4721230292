//! Window and OpenGL context management for the demo host.
//!
//! Window creation, GL context setup and egui wiring live here so that
//! `main.rs` only deals with ticking the scroller and drawing.

use std::error::Error;
use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use egui_glow::EguiGlow;

use flick_camera::constants::*;

pub struct WindowContext {
    pub window: Window,
    pub gl_surface: glutin::surface::Surface<WindowSurface>,
    pub gl_context: glutin::context::PossiblyCurrentContext,
    pub gl: Arc<glow::Context>,
    pub egui_glow: EguiGlow,
}

/// Create the demo window with an OpenGL 3.3 context and egui on top
pub fn create_window(event_loop: &ActiveEventLoop) -> Result<WindowContext, Box<dyn Error>> {
    let window_attrs = WindowAttributes::default()
        .with_title("Flick Camera")
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);

    let template = ConfigTemplateBuilder::new().with_alpha_size(8);
    let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

    // The picker has to hand back a config, so an empty list (EGL can report
    // success with none) has nothing to fall back to
    let (window, gl_config) = display_builder.build(event_loop, template, |configs| {
        most_samples(configs, |config| config.num_samples()).expect("display offered no GL configs")
    })?;

    let window = window.ok_or("window was not created")?;
    let raw_window_handle = window.window_handle()?.as_raw();
    let gl_display = gl_config.display();

    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_window_handle));

    let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attrs)? };

    let size = window.inner_size();
    let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        NonZeroU32::new(size.width.max(1)).ok_or("zero window width")?,
        NonZeroU32::new(size.height.max(1)).ok_or("zero window height")?,
    );

    let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs)? };
    let gl_context = gl_context.make_current(&gl_surface)?;

    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(&name) as *const _,
            Err(_) => std::ptr::null(),
        })
    });

    let egui_glow = EguiGlow::new(event_loop, gl.clone(), None, None, false);
    egui_glow.egui_ctx.set_style(crate::ui::style::inspector_style());

    log::info!("Window created ({}x{})", size.width, size.height);

    Ok(WindowContext {
        window,
        gl_surface,
        gl_context,
        gl,
        egui_glow,
    })
}

/// The candidate with the most MSAA samples; the earliest wins a tie
fn most_samples<T>(candidates: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    candidates.reduce(|best, candidate| {
        if samples(&candidate) > samples(&best) {
            candidate
        } else {
            best
        }
    })
}

/// Resize the GL surface to match the window size
pub fn resize_surface(
    gl_surface: &glutin::surface::Surface<WindowSurface>,
    gl_context: &glutin::context::PossiblyCurrentContext,
    width: u32,
    height: u32,
) {
    if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
        gl_surface.resize(gl_context, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_samples_prefers_highest() {
        let picked = most_samples([(0, 4u8), (1, 8), (2, 2)].into_iter(), |c| c.1);
        assert_eq!(picked, Some((1, 8)));
    }

    #[test]
    fn test_most_samples_keeps_first_on_tie() {
        let picked = most_samples([(0, 4u8), (1, 4)].into_iter(), |c| c.1);
        assert_eq!(picked, Some((0, 4)));
    }

    #[test]
    fn test_most_samples_empty_is_none() {
        let picked = most_samples(std::iter::empty::<(u32, u8)>(), |c| c.1);
        assert_eq!(picked, None);
    }
}
