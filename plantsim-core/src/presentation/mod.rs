//! Mappings the presentation layer binds to. Nothing here feeds back into
//! classification.

pub mod controls;
pub mod labels;
pub mod theme;

pub use controls::{parse_command, slider, track_color, validate, SliderSpec};
pub use labels::{status_label, Locale};
pub use theme::{theme_for, Color, PlantTheme};
