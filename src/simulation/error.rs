//! Error taxonomy for the simulation core.
//!
//! Every variant is a precondition violation; the integrator never retries.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share a position, so `G m1 m2 / d^2` has no finite value.
    #[error("degenerate distance: `{body}` and `{other}` occupy the same position")]
    DegenerateDistance { body: String, other: String },

    #[error("non-positive mass {mass} for body `{body}`")]
    NonPositiveMass { body: String, mass: f64 },

    #[error("invalid scenario: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
