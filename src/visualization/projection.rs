//! Simulation meters to screen pixels.
//!
//! Window coordinates follow the reference window: origin top-left, y down,
//! the simulation origin at the window centre. Bevy world coordinates put
//! the origin at the centre with y up, so `to_world` flips y.

use bevy::math::Vec2;

use crate::configuration::config::ViewConfig;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

/// Pixels per meter for this view
pub fn scale(view: &ViewConfig) -> f64 {
    view.pixels_per_au / AU
}

/// Window pixel position of a simulation point
pub fn to_window(p: &NVec2, view: &ViewConfig) -> Vec2 {
    let s = scale(view);
    Vec2::new(
        (p.x * s) as f32 + view.width / 2.0,
        (p.y * s) as f32 + view.height / 2.0,
    )
}

/// Bevy world position (camera at the origin) of a simulation point
pub fn to_world(p: &NVec2, view: &ViewConfig) -> Vec2 {
    let w = to_window(p, view);
    Vec2::new(w.x - view.width / 2.0, view.height / 2.0 - w.y)
}

/// Distance annotation text, kilometers with one decimal
pub fn distance_label(meters: f64) -> String {
    format!("{:.1}km", meters / 1000.0)
}
