//! egui panels for the demo host.

pub mod inspector;
pub mod style;

pub use inspector::{draw_inspector, InspectorActions, InspectorState, ScrollStatus};
