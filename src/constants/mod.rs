//! Tunable constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod camera;
mod scroll;
mod time;
mod ui;

pub use camera::*;
pub use scroll::*;
pub use time::*;
pub use ui::*;
