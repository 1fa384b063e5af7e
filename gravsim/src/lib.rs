pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3, Color};
pub use simulation::history::{PositionHistory, RetentionPolicy};
pub use simulation::error::{SimError, ConfigError, NumericalError};
pub use simulation::forces::{ForceModel, ForceSet, NewtonianGravity};
pub use simulation::engine::PhysicsEngine;
pub use simulation::integrator::euler_cromer_step;
pub use simulation::params::{Parameters, G_SI, DEFAULT_DT};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, RandomConfig, ScenarioConfig};

pub use visualization::projection::{rotate_y, View, Viewport};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
