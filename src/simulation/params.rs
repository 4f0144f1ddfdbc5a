//! Physical constants and numerical parameters for the simulation
//!
//! `Parameters` holds the per-run settings fixed at construction:
//! - the integration step (one simulated day by default),
//! - the gravitational constant,
//! - an optional cap on stored orbit points

/// Astronomical unit in meters
pub const AU: f64 = 149.6e9;

/// Gravitational constant, N m^2 / kg^2
pub const G: f64 = 6.67428e-11;

/// One simulated day in seconds
pub const TIMESTEP: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub timestep: f64, // seconds advanced per step
    pub g: f64, // gravitational constant
    pub orbit_capacity: Option<usize>, // None keeps every orbit point
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
            orbit_capacity: None,
        }
    }
}
