pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod headless;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Engine, UpdateOrder};
pub use simulation::params::{Parameters, AU, G, TIMESTEP};
pub use simulation::scenario::Scenario;
pub use simulation::error::SimError;
pub use simulation::diagnostics::{total_energy, total_momentum, ConservationState, Drift};

pub use configuration::config::{EngineConfig, ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig, UpdateOrderConfig};

pub use visualization::planet_vis2d::run_2d;
pub use headless::runner::run_headless;
