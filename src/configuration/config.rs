//! Configuration types for loading planet scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – update order and real-time tick rate
//! - [`ParametersConfig`] – step size, gravitational constant, orbit cap
//! - [`ViewConfig`]       – window size and pixels per AU for the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be omitted and falls back to the
//! reference values (one day per step, 60 ticks/s, 250 px/AU, 800x800).
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   update_order: "sequential"   # or "synchronized"
//!   tick_hz: 60.0
//!
//! parameters:
//!   timestep: 86400.0            # seconds per step
//!   G: 6.67428e-11
//!   orbit_capacity: null         # keep every orbit point
//!
//! view:
//!   width: 800.0
//!   height: 800.0
//!   pixels_per_au: 250.0
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: "Earth"
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [100, 149, 237]
//! ```

use serde::Deserialize;

use crate::simulation::params::{G, TIMESTEP};

/// Order in which bodies read and write positions within a step
/// update_order: "sequential"` or `update_order: "synchronized"
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub enum UpdateOrderConfig {
    #[serde(rename = "sequential")] // In-place, collection order; later bodies see earlier moves
    #[default]
    Sequential,

    #[serde(rename = "synchronized")] // Snapshot forces first, then commit all bodies
    Synchronized,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub update_order: UpdateOrderConfig,
    pub tick_hz: f64, // driver ticks per real second
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            update_order: UpdateOrderConfig::Sequential,
            tick_hz: 60.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub timestep: f64, // simulated seconds per step
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub orbit_capacity: Option<usize>, // newest points kept, None = unbounded
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
            orbit_capacity: None,
        }
    }
}

/// Window and projection settings, owned by the renderer
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32,
    pub height: f32,
    pub pixels_per_au: f64,
    pub font_size: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            pixels_per_au: 250.0,
            font_size: 16.0,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // position, meters
    #[serde(default)]
    pub v: [f64; 2], // velocity, meters / second
    pub m: f64, // mass, kg
    pub radius: f64, // on-screen radius, pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub anchor: bool,
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}
