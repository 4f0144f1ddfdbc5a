//! Fixed-step time integrator for the planet system
//!
//! One call advances every body by `params.timestep` with semi-implicit
//! (symplectic) Euler: velocity from the net force first, then position
//! from the new velocity

use super::engine::{Engine, UpdateOrder};
use super::error::Result;
use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{Body, Kinematics, NVec2, System};

/// Advance the system by one step, in the order selected by `engine`.
/// Updates positions, velocities, orbit history, anchor distances,
/// `sys.t` and `sys.steps` in-place.
/// A failed step leaves every body as it was before the call
pub fn semi_implicit_euler(sys: &mut System, forces: &ForceSet, engine: &Engine, params: &Parameters) -> Result<()> {
    let saved: Vec<Kinematics> = sys.bodies.iter().map(Body::kinematics).collect();

    let pass = match engine.update_order {
        UpdateOrder::Sequential => sequential_pass(&mut sys.bodies, forces, params),
        UpdateOrder::Synchronized => synchronized_pass(&mut sys.bodies, forces, params),
    };
    if let Err(err) = pass {
        for (b, k) in sys.bodies.iter_mut().zip(saved) {
            b.restore(k);
        }
        return Err(err);
    }

    // orbits only grow once the whole pass has succeeded
    for b in sys.bodies.iter_mut() {
        b.record_position(params.orbit_capacity);
    }

    // the in-pass side effect saw pre-move positions, report post-step ones
    sys.refresh_anchor_distances();

    sys.t += params.timestep;
    sys.steps += 1;
    Ok(())
}

/// Update bodies one at a time in collection order, no snapshot.
/// Body i reads bodies 0..i after their move and i+1.. before theirs
fn sequential_pass(bodies: &mut [Body], forces: &ForceSet, params: &Parameters) -> Result<()> {
    for i in 0..bodies.len() {
        let (before, rest) = bodies.split_at_mut(i);
        let Some((body, after)) = rest.split_first_mut() else {
            continue;
        };
        let force = body.net_force(before.iter().chain(after.iter()), forces)?;
        body.advance(force, params.timestep);
    }
    Ok(())
}

/// Two-phase step: every net force from pre-step positions, then commit
fn synchronized_pass(bodies: &mut [Body], forces: &ForceSet, params: &Parameters) -> Result<()> {
    let n = bodies.len();
    let mut net = vec![NVec2::zeros(); n];

    // nothing moves in this loop, so every read sees step N-1
    for i in 0..n {
        let (before, rest) = bodies.split_at_mut(i);
        let Some((body, after)) = rest.split_first_mut() else {
            continue;
        };
        net[i] = body.net_force(before.iter().chain(after.iter()), forces)?;
    }

    for (b, f) in bodies.iter_mut().zip(net) {
        b.advance(f, params.timestep);
    }
    Ok(())
}
