//! Core state types for the planet simulation.
//!
//! - `Body`   a point mass in the plane, using `NVec2`
//! - `System` the ordered body collection plus simulation time `t`
//!
//! Positions are meters, velocities meters/second. The collection order of
//! `System::bodies` is the canonical iteration order for every step.

use nalgebra::Vector2;

use super::error::{Result, SimError};
use super::forces::ForceSet;
use super::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// The per-step mutable state of a body, minus its orbit
#[derive(Debug, Clone, Copy)]
pub(crate) struct Kinematics {
    position: NVec2,
    velocity: NVec2,
    distance_to_anchor: f64,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub position: NVec2, // meters
    pub velocity: NVec2, // meters / second
    mass: f64, // kg, always > 0
    pub radius: f64, // pixels, render only
    pub color: [u8; 3], // sRGB, render only
    pub is_anchor: bool, // distances are reported against this body
    distance_to_anchor: f64,
    orbit: Vec<NVec2>, // chronological past positions
}

impl Body {
    /// Create a body at rest. Fails with [`SimError::NonPositiveMass`] unless `mass > 0`.
    pub fn new(name: impl Into<String>, position: NVec2, mass: f64, radius: f64, color: [u8; 3]) -> Result<Self> {
        let name = name.into();
        // also rejects NaN
        if !(mass > 0.0) {
            return Err(SimError::NonPositiveMass { body: name, mass });
        }

        Ok(Self {
            name,
            position,
            velocity: NVec2::zeros(),
            mass,
            radius,
            color,
            is_anchor: false,
            distance_to_anchor: 0.0,
            orbit: Vec::new(),
        })
    }

    pub fn with_velocity(mut self, velocity: NVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mark this body as the anchor (the star).
    pub fn anchored(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Last recorded distance to the anchor in meters, zero before the first step.
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance_to_anchor
    }

    pub fn orbit(&self) -> &[NVec2] {
        &self.orbit
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    pub fn momentum(&self) -> NVec2 {
        self.mass * self.velocity
    }

    /// Force pulling `self` toward `other`, summed over every term in `forces`.
    ///
    /// Querying the force from the anchor also records that distance in
    /// `distance_to_anchor`. Nothing is recorded when the force fails.
    pub fn attraction(&mut self, other: &Body, forces: &ForceSet) -> Result<NVec2> {
        let force = forces.force(self, other)?;
        if other.is_anchor {
            self.distance_to_anchor = self.distance_to(other);
        }
        Ok(force)
    }

    /// Accumulate the net force from `others` and advance one step.
    ///
    /// `others` must not contain `self`; it is walked in the order given.
    /// On error only `distance_to_anchor` may have changed.
    pub fn update_position<'a, I>(&mut self, others: I, forces: &ForceSet, params: &Parameters) -> Result<()>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let total = self.net_force(others, forces)?;
        self.apply_force(total, params);
        Ok(())
    }

    /// Sum of `attraction` over `others`, without moving `self`.
    pub fn net_force<'a, I>(&mut self, others: I, forces: &ForceSet) -> Result<NVec2>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut total = NVec2::zeros();
        for other in others {
            total += self.attraction(other, forces)?;
        }
        Ok(total)
    }

    /// Semi-implicit Euler: kick the velocity, then drift with the new velocity.
    pub fn apply_force(&mut self, force: NVec2, params: &Parameters) {
        self.advance(force, params.timestep);
        self.record_position(params.orbit_capacity);
    }

    /// Kick and drift without touching the orbit
    pub(crate) fn advance(&mut self, force: NVec2, dt: f64) {
        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
    }

    pub(crate) fn kinematics(&self) -> Kinematics {
        Kinematics {
            position: self.position,
            velocity: self.velocity,
            distance_to_anchor: self.distance_to_anchor,
        }
    }

    pub(crate) fn restore(&mut self, saved: Kinematics) {
        self.position = saved.position;
        self.velocity = saved.velocity;
        self.distance_to_anchor = saved.distance_to_anchor;
    }

    pub(crate) fn set_distance_to_anchor(&mut self, distance: f64) {
        self.distance_to_anchor = distance;
    }

    pub(crate) fn record_position(&mut self, capacity: Option<usize>) {
        self.orbit.push(self.position);
        if let Some(cap) = capacity {
            if self.orbit.len() > cap {
                let excess = self.orbit.len() - cap;
                self.orbit.drain(..excess);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // canonical order
    pub t: f64, // simulated seconds
    pub steps: u64, // completed steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    /// With several anchors the last one wins, as each `attraction` pass overwrites the distance
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().rev().find(|b| b.is_anchor)
    }

    pub fn anchor_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_anchor).count()
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Recompute every non-anchor body's distance from the current positions.
    pub fn refresh_anchor_distances(&mut self) {
        let Some(anchor) = self.anchor().map(|a| a.position) else {
            return;
        };
        for b in self.bodies.iter_mut().filter(|b| !b.is_anchor) {
            b.set_distance_to_anchor((anchor - b.position).norm());
        }
    }
}
