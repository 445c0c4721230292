//! Inspector styling: flat panels, hard borders, a muted blueprint palette.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, Frame, Margin, Rounding, Stroke, Style, Visuals};

pub mod colors {
    use egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgb(16, 22, 34);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(48, 66, 96);

    pub const BUTTON_BG: Color32 = Color32::from_rgb(24, 32, 48);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(34, 46, 68);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(44, 60, 88);
    pub const BUTTON_BORDER: Color32 = Color32::from_rgb(64, 86, 120);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(210, 220, 235);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 145, 170);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(240, 166, 52);

    pub const SELECTED: Color32 = Color32::from_rgb(52, 80, 120);

    /// Phase badge colors
    pub const PHASE_IDLE: Color32 = Color32::from_rgb(130, 145, 170);
    pub const PHASE_DRAGGING: Color32 = Color32::from_rgb(90, 170, 230);
    pub const PHASE_DRIFTING: Color32 = Color32::from_rgb(110, 190, 120);
    pub const PHASE_DISABLED: Color32 = Color32::from_rgb(190, 80, 70);
}

pub const BORDER_WIDTH: f32 = 1.0;

fn widget(bg: Color32, border: Stroke, fg: Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: border,
        rounding: Rounding::ZERO,
        fg_stroke: Stroke::new(1.0, fg),
        expansion: 0.0,
    }
}

fn inspector_widgets() -> Widgets {
    Widgets {
        noninteractive: widget(
            colors::PANEL_BG,
            Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            colors::TEXT_MUTED,
        ),
        inactive: widget(
            colors::BUTTON_BG,
            Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            colors::TEXT_PRIMARY,
        ),
        hovered: widget(
            colors::BUTTON_HOVER,
            Stroke::new(BORDER_WIDTH, colors::TEXT_ACCENT),
            colors::TEXT_PRIMARY,
        ),
        active: widget(
            colors::BUTTON_ACTIVE,
            Stroke::new(2.0, colors::TEXT_ACCENT),
            colors::TEXT_PRIMARY,
        ),
        open: widget(
            colors::BUTTON_ACTIVE,
            Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            colors::TEXT_PRIMARY,
        ),
    }
}

pub fn inspector_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;
    visuals.extreme_bg_color = colors::BUTTON_BG;

    visuals.widgets = inspector_widgets();
    visuals.selection.bg_fill = colors::SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ACCENT);
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

pub fn inspector_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(8.0))
}

pub fn inspector_style() -> Style {
    Style {
        visuals: inspector_visuals(),
        ..Style::default()
    }
}
