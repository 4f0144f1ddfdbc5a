//! Force contributors for the planet simulation
//!
//! Defines the pairwise force trait, the set that sums force terms,
//! and direct Newtonian gravity

use super::error::{Result, SimError};
use super::states::{Body, NVec2};

/// Collection of pairwise force terms
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per pair
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total force exerted on `body` by `other`, in newtons
    pub fn force(&self, body: &Body, other: &Body) -> Result<NVec2> {
        let mut total = NVec2::zeros();
        for term in &self.terms {
            total += term.force(body, other)?;
        }
        Ok(total)
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Pairwise force source
/// Implementations return the force on `body` caused by `other`
pub trait ForceLaw {
    fn force(&self, body: &Body, other: &Body) -> Result<NVec2>;
}

/// 2D Newtonian gravity without softening
/// Coincident bodies are an error, not clamped
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl ForceLaw for NewtonianGravity {
    fn force(&self, body: &Body, other: &Body) -> Result<NVec2> {
        // displacement from body to other, the direction of the pull
        let r = other.position - body.position;
        let d = r.norm();
        if d == 0.0 {
            return Err(SimError::DegenerateDistance {
                body: body.name.clone(),
                other: other.name.clone(),
            });
        }

        // |F| = G m1 m2 / d^2
        let magnitude = self.g * body.mass() * other.mass() / (d * d);
        let theta = r.y.atan2(r.x);

        Ok(NVec2::new(magnitude * theta.cos(), magnitude * theta.sin()))
    }
}
