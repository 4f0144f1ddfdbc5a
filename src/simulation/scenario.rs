//! Build fully-initialized planet scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//! - the window/projection settings handed to the renderer (`ViewConfig`)
//!
//! `Scenario::inner_solar_system` is the built-in scenario used when no
//! YAML file is given: the Sun and the four inner planets on the x axis

use log::{debug, info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::simulation::diagnostics::ConservationState;
use crate::simulation::engine::Engine;
use crate::simulation::error::{Result, SimError};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// Steps between drift reports, one simulated year at the default step
const DIAGNOSTIC_INTERVAL: u64 = 365;

/// The main "runtime bundle" built from a [`ScenarioConfig`]:
/// engine settings, parameters, current system state, the set of
/// active force laws and the view settings for whoever renders it
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub view: ViewConfig,
    conservation: ConservationState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        if cfg.bodies.is_empty() {
            return Err(SimError::InvalidConfig("scenario has no bodies".into()));
        }
        if !(cfg.parameters.timestep > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "timestep must be positive, got {}",
                cfg.parameters.timestep
            )));
        }
        if !(cfg.engine.tick_hz > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "tick_hz must be positive, got {}",
                cfg.engine.tick_hz
            )));
        }
        if cfg.parameters.orbit_capacity == Some(0) {
            return Err(SimError::InvalidConfig("orbit_capacity must be at least 1".into()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(body_from_config)
            .collect::<Result<Vec<Body>>>()?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            timestep: p_cfg.timestep,
            g: p_cfg.g,
            orbit_capacity: p_cfg.orbit_capacity,
        };

        let engine = Engine {
            update_order: cfg.engine.update_order.into(),
            tick_hz: cfg.engine.tick_hz,
        };

        Ok(Self::assemble(engine, parameters, System::new(bodies), cfg.view))
    }

    /// Sun, Mercury, Venus, Earth and Mars with their mean orbital speeds
    pub fn inner_solar_system() -> Result<Self> {
        let bodies = vec![
            Body::new("Sun", NVec2::zeros(), 1.98892e30, 30.0, [255, 255, 0])?.anchored(),
            Body::new("Earth", NVec2::new(-1.0 * AU, 0.0), 5.9742e24, 16.0, [100, 149, 237])?
                .with_velocity(NVec2::new(0.0, 29.783e3)),
            Body::new("Mars", NVec2::new(-1.524 * AU, 0.0), 6.39e23, 12.0, [188, 39, 50])?
                .with_velocity(NVec2::new(0.0, 24.077e3)),
            Body::new("Mercury", NVec2::new(0.387 * AU, 0.0), 3.30e23, 8.0, [80, 78, 81])?
                .with_velocity(NVec2::new(0.0, -47.4e3)),
            Body::new("Venus", NVec2::new(0.723 * AU, 0.0), 4.8685e24, 14.0, [255, 255, 255])?
                .with_velocity(NVec2::new(0.0, -35.02e3)),
        ];

        Ok(Self::assemble(
            Engine::default(),
            Parameters::default(),
            System::new(bodies),
            ViewConfig::default(),
        ))
    }

    fn assemble(engine: Engine, parameters: Parameters, system: System, view: ViewConfig) -> Self {
        let anchors = system.anchor_count();
        if anchors != 1 {
            warn!("scenario has {anchors} anchor bodies, distance labels expect exactly one");
        }

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });
        let conservation = ConservationState::new(&system, parameters.g);

        info!(
            "scenario ready: {} bodies, dt = {} s, {:?} update order",
            system.bodies.len(),
            parameters.timestep,
            engine.update_order
        );

        Self {
            engine,
            parameters,
            system,
            forces,
            view,
            conservation,
        }
    }

    /// Advance one simulation step
    pub fn step(&mut self) -> Result<()> {
        semi_implicit_euler(&mut self.system, &self.forces, &self.engine, &self.parameters)?;

        if self.system.steps % DIAGNOSTIC_INTERVAL == 0 {
            let drift = self.conservation.check(&self.system);
            debug!(
                "step {}: energy drift {:.3e}, momentum drift {:.3e} kg m/s",
                self.system.steps,
                drift.energy_error,
                drift.momentum_error.norm()
            );
        }
        Ok(())
    }

    pub fn conservation(&self) -> &ConservationState {
        &self.conservation
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    let body = Body::new(bc.name.clone(), NVec2::new(bc.x[0], bc.x[1]), bc.m, bc.radius, bc.color)?
        .with_velocity(NVec2::new(bc.v[0], bc.v[1]));
    Ok(if bc.anchor { body.anchored() } else { body })
}
