//! Driver-facing force engine
//!
//! `PhysicsEngine` is stateless between calls: every call reads a snapshot of the
//! bodies and returns a fresh force vector per body, in input order. It never
//! writes to the bodies; assigning forces and moving bodies is left to the caller

use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceModel, ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

pub struct PhysicsEngine {
    forces: ForceSet,
}

impl PhysicsEngine {
    /// Engine with direct Newtonian gravity taken from `params`
    pub fn new(params: &Parameters) -> Result<Self, SimError> {
        params.validate()?;
        let gravity = NewtonianGravity::new(params.g, params.softening)?;
        Ok(Self {
            forces: ForceSet::new().with(gravity),
        })
    }

    /// Engine over an arbitrary set of terms
    pub fn from_forces(forces: ForceSet) -> Self {
        Self { forces }
    }

    /// Register an extra term on top of the existing ones
    pub fn with<T>(self, term: T) -> Self
    where
        T: ForceModel + Send + Sync + 'static,
    {
        Self {
            forces: self.forces.with(term),
        }
    }

    pub fn forces(&self) -> &ForceSet {
        &self.forces
    }

    /// Net force on every body, `out[i]` for `bodies[i]`
    ///
    /// An empty slice yields an empty vector; a single body yields one zero vector
    pub fn compute_forces(&self, bodies: &[Body]) -> Result<Vec<NVec3>, SimError> {
        let mut out = vec![NVec3::zeros(); bodies.len()];
        if bodies.is_empty() {
            return Ok(out);
        }
        self.forces.accumulate_forces(bodies, &mut out)?;
        Ok(out)
    }
}
