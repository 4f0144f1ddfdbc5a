//! Conservation monitoring for the planet system.
//!
//! Tracks total momentum and energy against a baseline to expose drift
//! from the discrete integration scheme.

use super::states::{NVec2, System};

/// Total linear momentum: sum_i m_i v_i
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies.iter().map(|b| b.momentum()).sum()
}

/// Kinetic plus gravitational potential energy, joules.
/// Coincident pairs are skipped.
pub fn total_energy(sys: &System, g: f64) -> f64 {
    let kinetic: f64 = sys
        .bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.norm_squared())
        .sum();

    let mut potential = 0.0;
    for (i, bi) in sys.bodies.iter().enumerate() {
        for bj in &sys.bodies[i + 1..] {
            let d = bi.distance_to(bj);
            if d > 0.0 {
                potential -= g * bi.mass() * bj.mass() / d;
            }
        }
    }

    kinetic + potential
}

/// Baseline quantities captured at construction.
#[derive(Debug, Clone)]
pub struct ConservationState {
    pub baseline_energy: f64,
    pub baseline_momentum: NVec2,
    g: f64,
}

impl ConservationState {
    pub fn new(sys: &System, g: f64) -> Self {
        Self {
            baseline_energy: total_energy(sys, g),
            baseline_momentum: total_momentum(sys),
            g,
        }
    }

    /// Compare the current state against the baseline.
    pub fn check(&self, sys: &System) -> Drift {
        let energy = total_energy(sys, self.g);
        let momentum = total_momentum(sys);

        // relative when the baseline is meaningful, absolute otherwise
        let energy_error = if self.baseline_energy.abs() > 1e-12 {
            (energy - self.baseline_energy).abs() / self.baseline_energy.abs()
        } else {
            (energy - self.baseline_energy).abs()
        };

        Drift {
            energy_error,
            momentum_error: momentum - self.baseline_momentum,
        }
    }
}

/// Conservation errors at the current step.
#[derive(Debug, Clone)]
pub struct Drift {
    /// |E - E0| / |E0|
    pub energy_error: f64,
    /// p - p0
    pub momentum_error: NVec2,
}
