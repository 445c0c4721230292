mod app;
mod renderer;
mod ui;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use flick_camera::constants::*;
use flick_camera::{
    select_input, CameraView, InertialScroller, InputSampler, OrthoCamera, PlatformCapabilities,
    PointerEvent, ScrollConfig,
};
use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use renderer::Renderer;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

/// Interactive demo of inertial drag scrolling
#[derive(Parser, Debug)]
#[command(name = "flick-camera")]
#[command(version, about = "Inertial drag scrolling demo", long_about = None)]
struct Args {
    /// JSON scroll tuning file; defaults are used when omitted
    config: Option<PathBuf>,

    /// Serve puffin profiles on PROFILER_ADDR
    #[arg(long, env = PROFILE_ENV_VAR, value_parser = clap::builder::FalseyValueParser::new())]
    profile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _profiler = start_profiler(&args);
    let config = load_config(&args);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Serve puffin profiles when asked to. The server lives as long as the guard.
fn start_profiler(args: &Args) -> Option<puffin_http::Server> {
    if !args.profile {
        return None;
    }

    puffin::set_scopes_on(true);
    match puffin_http::Server::new(PROFILER_ADDR) {
        Ok(server) => {
            log::info!("Profiler listening on {}", PROFILER_ADDR);
            Some(server)
        }
        Err(e) => {
            log::warn!("Failed to start profiler server: {}", e);
            None
        }
    }
}

/// Config from the file named on the command line, or defaults
fn load_config(args: &Args) -> ScrollConfig {
    let Some(path) = &args.config else {
        return ScrollConfig::default();
    };

    match ScrollConfig::load(path) {
        Ok(config) => {
            log::info!("Loaded scroll config from {}", path.display());
            let sanitized = config.sanitized();
            if sanitized != config {
                for warning in config.validate() {
                    log::warn!("{}", warning);
                }
                log::warn!("Clamped out-of-range tuning values in {}", path.display());
            }
            sanitized
        }
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            ScrollConfig::default()
        }
    }
}

struct App {
    config: ScrollConfig,
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    egui_glow: EguiGlow,

    // Rendering
    camera: OrthoCamera,
    renderer: Renderer,

    // Scrolling
    scroller: InertialScroller,
    input: Box<dyn InputSampler>,
    input_backend: &'static str,

    inspector: ui::InspectorState,

    // Timing
    last_frame_time: Instant,
    /// Host clock in seconds, advanced by capped frame deltas
    clock: f32,
    fixed_accumulator: f32,
}

impl App {
    fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = match app::create_window(event_loop) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match Renderer::new(gl) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to create renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let camera = OrthoCamera::new(size.width as f32, size.height as f32);
        renderer.resize(size.width as i32, size.height as i32);

        let capabilities = PlatformCapabilities::detect();
        let input = select_input(capabilities);
        let input_backend = if capabilities.prefers_touch() { "touch" } else { "pointer" };

        let mut scroller = InertialScroller::new(self.config.clone());
        scroller.start(&camera);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            egui_glow,
            camera,
            renderer,
            scroller,
            input,
            input_backend,
            inspector: ui::InspectorState::new(),
            last_frame_time: Instant::now(),
            clock: 0.0,
            fixed_accumulator: 0.0,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event).consumed;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.renderer.resize(size.width as i32, size.height as i32);
                state.camera.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed && event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::F1) => state.inspector.toggle(),
                        _ => {}
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                state.input.handle_event(&PointerEvent::CursorMoved(position));
            }
            WindowEvent::MouseInput {
                state: btn_state,
                button: MouseButton::Left,
                ..
            } => match btn_state {
                // Presses over the inspector belong to egui; releases always go through
                ElementState::Pressed if !egui_consumed => {
                    state.input.handle_event(&PointerEvent::ButtonPressed);
                }
                ElementState::Pressed => {}
                ElementState::Released => {
                    state.input.handle_event(&PointerEvent::ButtonReleased);
                }
            },
            // The release for a drag in progress would go to another window
            WindowEvent::Focused(false) => {
                state.input.handle_event(&PointerEvent::Cancelled);
            }
            WindowEvent::Touch(touch) => {
                let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                let pointer_event = match touch.phase {
                    TouchPhase::Started if egui_consumed => None,
                    TouchPhase::Started => Some(PointerEvent::TouchStarted {
                        id: touch.id,
                        position,
                    }),
                    TouchPhase::Moved => Some(PointerEvent::TouchMoved {
                        id: touch.id,
                        position,
                    }),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        Some(PointerEvent::TouchEnded { id: touch.id })
                    }
                };
                if let Some(pointer_event) = pointer_event {
                    state.input.handle_event(&pointer_event);
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();

        let current_time = Instant::now();
        let dt = (current_time - self.last_frame_time)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame_time = current_time;

        self.tick(dt);

        let actions = self.run_ui();
        self.process_ui_actions(actions);

        self.renderer.render(
            &self.camera,
            &self.scroller.config().limits(),
            self.inspector.show_grid_lines,
        );

        {
            puffin::profile_scope!("paint_ui");
            self.egui_glow.paint(&self.window);
        }

        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("Failed to swap buffers: {}", e);
        }
    }

    /// Fixed steps first, then the frame step, on one shared clock
    fn tick(&mut self, dt: f32) {
        puffin::profile_function!();

        self.clock += dt;
        self.fixed_accumulator += dt;

        let mut steps = 0;
        while self.fixed_accumulator >= FIXED_TIMESTEP && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.fixed_accumulator -= FIXED_TIMESTEP;
            let fixed_now = self.clock - self.fixed_accumulator;
            self.scroller
                .fixed_update(fixed_now, &mut self.camera, self.input.as_ref());
            steps += 1;
        }
        if steps == MAX_FIXED_STEPS_PER_FRAME {
            // Drop the backlog instead of spiraling
            self.fixed_accumulator = 0.0;
        }

        self.scroller
            .update(self.clock, &mut self.camera, self.input.as_ref());
    }

    fn run_ui(&mut self) -> ui::InspectorActions {
        puffin::profile_function!();

        let status = ui::ScrollStatus {
            phase: self.scroller.phase_kind(),
            velocity: self.scroller.velocity(),
            camera_position: self.camera.position(),
            input_backend: self.input_backend,
        };

        let mut actions = ui::InspectorActions::default();
        let inspector = &mut self.inspector;
        let config = self.scroller.config_mut();

        self.egui_glow.run(&self.window, |ctx| {
            actions = ui::draw_inspector(ctx, inspector, config, &status);
        });

        actions
    }

    fn process_ui_actions(&mut self, actions: ui::InspectorActions) {
        if actions.enable {
            self.scroller.enable();
        }
        if actions.disable {
            self.scroller.disable();
        }
        if actions.recenter {
            self.camera.set_position(Vec2::ZERO);
        }
        if actions.reset_config {
            self.scroller.set_config(ScrollConfig::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_take_config_path() {
        let args = Args::try_parse_from(["flick-camera", "tuning.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("tuning.json")));
    }

    #[test]
    fn test_args_default_to_no_config() {
        let args = Args::try_parse_from(["flick-camera"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(load_config(&args), ScrollConfig::default());
    }

    #[test]
    fn test_profile_flag() {
        let args = Args::try_parse_from(["flick-camera", "--profile"]).unwrap();
        assert!(args.profile);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let args = Args::try_parse_from(["flick-camera", "/nonexistent/flick.json"]).unwrap();
        assert_eq!(load_config(&args), ScrollConfig::default());
    }

    #[test]
    fn test_loaded_config_is_clamped() {
        let path = std::env::temp_dir().join(format!("flick_camera_args_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "bounce_power": 3.0, "drag": 0.7 }"#).unwrap();
        let args = Args { config: Some(path.clone()), profile: false };
        let config = load_config(&args);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.bounce_power, 1.0);
        assert_eq!(config.drag, 0.7);
    }
}
