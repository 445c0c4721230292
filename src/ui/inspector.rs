//! Live inspector for the scroller: every tunable plus the current phase.

use super::style::{self, colors};
use flick_camera::constants::*;
use flick_camera::{AxisMode, PhaseKind, ScrollConfig};
use glam::Vec2;

/// Inspector window toggles
pub struct InspectorState {
    pub visible: bool,
    pub show_grid_lines: bool,
}

impl Default for InspectorState {
    fn default() -> Self {
        Self {
            visible: true,
            show_grid_lines: true,
        }
    }
}

impl InspectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Read-only snapshot shown in the status section
pub struct ScrollStatus {
    pub phase: PhaseKind,
    pub velocity: Vec2,
    pub camera_position: Vec2,
    pub input_backend: &'static str,
}

/// Buttons pressed this frame
#[derive(Default)]
pub struct InspectorActions {
    pub enable: bool,
    pub disable: bool,
    pub recenter: bool,
    pub reset_config: bool,
}

fn phase_color(phase: PhaseKind) -> egui::Color32 {
    match phase {
        PhaseKind::Disabled => colors::PHASE_DISABLED,
        PhaseKind::Idle => colors::PHASE_IDLE,
        PhaseKind::Dragging => colors::PHASE_DRAGGING,
        PhaseKind::Drifting => colors::PHASE_DRIFTING,
    }
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(text).color(colors::TEXT_ACCENT).strong());
}

pub fn draw_inspector(
    ctx: &egui::Context,
    state: &mut InspectorState,
    config: &mut ScrollConfig,
    status: &ScrollStatus,
) -> InspectorActions {
    let mut actions = InspectorActions::default();
    if !state.visible {
        return actions;
    }

    egui::Window::new("Scroll")
        .frame(style::inspector_frame())
        .default_width(INSPECTOR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            heading(ui, "Status");
            egui::Grid::new("scroll_status").num_columns(2).show(ui, |ui| {
                ui.label("phase");
                ui.colored_label(phase_color(status.phase), status.phase.name());
                ui.end_row();
                ui.label("velocity");
                ui.label(format!("{:.3}, {:.3}", status.velocity.x, status.velocity.y));
                ui.end_row();
                ui.label("camera");
                ui.label(format!(
                    "{:.2}, {:.2}",
                    status.camera_position.x, status.camera_position.y
                ));
                ui.end_row();
                ui.label("input");
                ui.label(status.input_backend);
                ui.end_row();
            });

            ui.horizontal(|ui| {
                if status.phase == PhaseKind::Disabled {
                    actions.enable = ui.button("Enable").clicked();
                } else {
                    actions.disable = ui.button("Disable").clicked();
                }
                actions.recenter = ui.button("Recenter").clicked();
            });

            heading(ui, "Motion");
            ui.add(egui::Slider::new(&mut config.drag, MIN_DRAG..=1.0).text("drag"));
            egui::ComboBox::from_label("axes")
                .selected_text(config.axis_mode.name())
                .show_ui(ui, |ui| {
                    for mode in AxisMode::ALL {
                        ui.selectable_value(&mut config.axis_mode, mode, mode.name());
                    }
                });
            ui.checkbox(&mut config.auto_enable, "auto enable");

            heading(ui, "Limits");
            ui.checkbox(&mut config.do_limit_horizontal, "limit horizontal");
            ui.add_enabled_ui(config.do_limit_horizontal, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut config.limit_left).speed(0.1).prefix("left "));
                    ui.add(egui::DragValue::new(&mut config.limit_right).speed(0.1).prefix("right "));
                });
            });
            ui.checkbox(&mut config.do_limit_vertical, "limit vertical");
            ui.add_enabled_ui(config.do_limit_vertical, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut config.limit_bottom).speed(0.1).prefix("bottom "));
                    ui.add(egui::DragValue::new(&mut config.limit_top).speed(0.1).prefix("top "));
                });
            });
            ui.add(egui::Slider::new(&mut config.bounce_power, 0.0..=1.0).text("bounce"));
            ui.add(
                egui::Slider::new(&mut config.off_limit_friction, 0.0..=MAX_OFF_LIMIT_FRICTION)
                    .text("edge friction"),
            );
            for warning in config.validate() {
                ui.colored_label(colors::PHASE_DISABLED, warning.to_string());
            }

            heading(ui, "View");
            ui.checkbox(&mut state.show_grid_lines, "grid lines");
            actions.reset_config = ui.button("Reset tuning").clicked();
            ui.label(egui::RichText::new("F1 toggles this window").color(colors::TEXT_MUTED));
        });

    actions
}
