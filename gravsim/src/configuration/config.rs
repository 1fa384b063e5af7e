//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario file consists of:
//!
//! - [`ParametersConfig`] – physical constants, step size and trajectory retention
//! - [`BodyConfig`]       – initial state for each explicitly listed body
//! - [`RandomConfig`]     – optional seeded random cluster, added after the listed bodies
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   g: 6.674e-11            # gravitational constant (SI)
//!   dt: 0.005               # global time step, seconds
//!   softening: 0.0          # 0 disables softening
//!   record_history: true
//!   history:
//!     policy: ring          # unbounded | ring | decimate
//!     capacity: 2000
//!
//! bodies:
//!   - position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     mass: 6.0e18
//!     radius: 40.0
//!     color: [255, 255, 255]
//!     anchored: true
//!   - position: [250.0, 0.0, 0.0]
//!     velocity: [0.0, 400.0, 0.0]
//!     mass: 6.0e16
//!     time_step: 0.0025
//!
//! random:
//!   count: 8
//!   seed: 42
//! ```
//!
//! Every field of `parameters` is optional and falls back to [`Parameters::default`].

use serde::Deserialize;

use crate::simulation::error::ConfigError;
use crate::simulation::history::RetentionPolicy;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub g: Option<f64>,            // gravitational constant
    pub dt: Option<f64>,           // time step size
    pub softening: Option<f64>,    // prevent singular forces at very small separations
    pub record_history: Option<bool>,
    pub history: Option<RetentionPolicy>,
}

impl ParametersConfig {
    /// Merge onto the defaults and validate
    pub fn to_parameters(&self) -> Result<Parameters, ConfigError> {
        let d = Parameters::default();
        let p = Parameters {
            g: self.g.unwrap_or(d.g),
            dt: self.dt.unwrap_or(d.dt),
            softening: self.softening.unwrap_or(d.softening),
            record_history: self.record_history.unwrap_or(d.record_history),
            history: self.history.unwrap_or(d.history),
        };
        p.validate()?;
        Ok(p)
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub position: Vec<f64>,         // metres
    #[serde(default)]
    pub velocity: Vec<f64>,         // metres per second, empty = at rest
    pub mass: f64,                  // kilograms
    pub radius: Option<f64>,        // display only
    pub color: Option<[u8; 3]>,     // display only
    pub time_step: Option<f64>,     // overrides parameters.dt for this body
    #[serde(default)]
    pub anchored: bool,             // pin to the initial position
}

/// Seeded random cluster around a heavy anchored centre
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    pub count: usize, // satellites, the centre is extra
    pub seed: u64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    pub random: Option<RandomConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

/// Turn a YAML list into a 3-vector; an empty list means zero
pub fn vec3(field: &'static str, v: &[f64]) -> Result<NVec3, ConfigError> {
    match v {
        [] => Ok(NVec3::zeros()),
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ConfigError::BadVectorLength { field, len: v.len() }),
    }
}
