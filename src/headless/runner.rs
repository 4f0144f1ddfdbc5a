//! Window-less driver: step a scenario a fixed number of times and report
//! where every body ended up.

use log::info;

use crate::simulation::error::Result;
use crate::simulation::params::TIMESTEP;
use crate::simulation::scenario::Scenario;
use crate::visualization::projection::distance_label;

/// Advance `scenario` by `steps` ticks, stopping at the first failed step
pub fn run_headless(scenario: &mut Scenario, steps: u64) -> Result<()> {
    info!("run_headless: {} bodies for {steps} steps", scenario.system.bodies.len());

    for _ in 0..steps {
        scenario.step()?;
    }

    let days = scenario.system.t / TIMESTEP;
    for b in scenario.system.bodies.iter().filter(|b| !b.is_anchor) {
        info!(
            "{:>8}: {} from anchor, |v| = {:.1} m/s after {days:.1} days",
            b.name,
            distance_label(b.distance_to_anchor()),
            b.velocity.norm()
        );
    }

    let drift = scenario.conservation().check(&scenario.system);
    info!(
        "energy drift {:.3e}, momentum drift {:.3e} kg m/s",
        drift.energy_error,
        drift.momentum_error.norm()
    );
    Ok(())
}
