//! Numerical and physical parameters for the simulation
//!
//! Units are SI throughout: metres, kilograms, seconds. `Parameters` holds:
//! - the gravitational constant `g`,
//! - the global time step `dt` (bodies may override it),
//! - the softening length (0 = plain Newtonian),
//! - trajectory recording and its retention policy

use crate::simulation::error::ConfigError;
use crate::simulation::history::RetentionPolicy;

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.674e-11;

/// Step used by the original demo, in seconds
pub const DEFAULT_DT: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size
    pub softening: f64, // epsilon, added in quadrature to pair distances
    pub record_history: bool, // append positions after each tick
    pub history: RetentionPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G_SI,
            dt: DEFAULT_DT,
            softening: 0.0,
            record_history: true,
            history: RetentionPolicy::Unbounded,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.g > 0.0 && self.g.is_finite()) {
            return Err(ConfigError::NonPositiveGravity(self.g));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if !(self.softening >= 0.0 && self.softening.is_finite()) {
            return Err(ConfigError::NegativeSoftening(self.softening));
        }
        self.history.validate()
    }
}
