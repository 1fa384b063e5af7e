//! Force contributors for the simulation
//!
//! A [`ForceModel`] adds its contribution into a per-body force buffer. A
//! [`ForceSet`] zeroes the buffer and sums every registered term. The only term
//! shipped is direct Newtonian gravity, an O(N^2) all-pairs sum; that cost is the
//! scaling limit of this crate, which targets a handful of bodies

use crate::simulation::error::{ConfigError, NumericalError, SimError};
use crate::simulation::states::{Body, NVec3};

/// Trait for force sources operating on a snapshot of bodies
/// Implementations add their contribution into `out[i]` for each body and
/// must not assume `out` starts at zero
pub trait ForceModel {
    fn accumulate(&self, bodies: &[Body], out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Collection of force terms whose contributions are summed per body
#[derive(Default)]
pub struct ForceSet {
    terms: Vec<Box<dyn ForceModel + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceModel + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces for all bodies in `bodies`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec3]) -> Result<(), SimError> {
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        for term in &self.terms {
            term.accumulate(bodies, out)?;
        }
        Ok(())
    }
}

/// Newtonian gravity by direct summation
///
/// With `softening = 0` a coincident pair is reported as an error rather than
/// clamped. A positive softening uses the Plummer form, d^2 = |r|^2 + eps^2
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    g: f64,
    softening: f64,
}

impl NewtonianGravity {
    pub fn new(g: f64, softening: f64) -> Result<Self, ConfigError> {
        if !(g > 0.0 && g.is_finite()) {
            return Err(ConfigError::NonPositiveGravity(g));
        }
        if !(softening >= 0.0 && softening.is_finite()) {
            return Err(ConfigError::NegativeSoftening(softening));
        }
        Ok(Self { g, softening })
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn softening(&self) -> f64 {
        self.softening
    }
}

impl ForceModel for NewtonianGravity {
    fn accumulate(&self, bodies: &[Body], out: &mut [NVec3]) -> Result<(), SimError> {
        let n = bodies.len();
        let eps2 = self.softening * self.softening;

        // Each unordered pair once; i gets +f and j gets -f, so the pair forces
        // cancel exactly in the total
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                // points from i to j, so i is pulled along +r
                let r = bj.position - bi.position;
                let d2 = r.norm_squared() + eps2;
                let d = d2.sqrt();
                let d3 = d2 * d;

                // distance collapsed (or d^3 underflowed); overflow of the mass
                // product and NaN inputs are left to propagate
                if d2 == 0.0 || d3 == 0.0 {
                    return Err(NumericalError::CoincidentBodies { i, j }.into());
                }

                // G m_i m_j / d^2 * (r / d)
                let coef = self.g * bi.mass() * bj.mass() / d3;

                let f = coef * r;
                out[i] += f;
                out[j] -= f;
            }
        }
        Ok(())
    }
}
