//! Error types for the simulation core
//!
//! Two families:
//! - configuration errors, raised when a body, parameter set or scenario is built
//! - numerical errors, raised by the force computation when two bodies coincide
//!
//! Nothing here is retried; a failed force pass is deterministic and the caller
//! decides whether to halt the loop or skip the tick

use std::fmt;

/// Invalid construction input
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveMass(f64),
    NonPositiveTimeStep(f64),
    NegativeSoftening(f64),
    NonPositiveGravity(f64),
    InvalidHistoryCapacity, // ring capacity or decimation interval of zero
    BadVectorLength { field: &'static str, len: usize },
}

/// Failure of a force pass
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalError {
    /// Bodies `i` and `j` sit at (numerically) the same point and no softening is set
    CoincidentBodies { i: usize, j: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    Configuration(ConfigError),
    Numerical(NumericalError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveMass(m) => write!(f, "mass must be positive and finite, got {m}"),
            ConfigError::NonPositiveTimeStep(dt) => write!(f, "time step must be positive and finite, got {dt}"),
            ConfigError::NegativeSoftening(eps) => write!(f, "softening must be finite and >= 0, got {eps}"),
            ConfigError::NonPositiveGravity(g) => {
                write!(f, "gravitational constant must be positive and finite, got {g}")
            }
            ConfigError::InvalidHistoryCapacity => {
                write!(f, "history capacity and decimation interval must be at least 1")
            }
            ConfigError::BadVectorLength { field, len } => {
                write!(f, "`{field}` needs 3 components, got {len}")
            }
        }
    }
}

impl fmt::Display for NumericalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericalError::CoincidentBodies { i, j } => write!(
                f,
                "bodies {i} and {j} coincide; force is singular without softening"
            ),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration(e) => write!(f, "configuration error: {e}"),
            SimError::Numerical(e) => write!(f, "numerical error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for NumericalError {}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Configuration(e) => Some(e),
            SimError::Numerical(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Configuration(e)
    }
}

impl From<NumericalError> for SimError {
    fn from(e: NumericalError) -> Self {
        SimError::Numerical(e)
    }
}
