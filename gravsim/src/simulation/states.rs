//! Core state types for the simulation
//!
//! - `Body`: one point mass, its integration rule and its trajectory
//! - `System`: the ordered collection of bodies plus simulation time
//!
//! Everything is 3D and uses `NVec3` (nalgebra, f64)

use nalgebra::Vector3;

use crate::simulation::error::{ConfigError, SimError};
use crate::simulation::history::{PositionHistory, RetentionPolicy};

pub type NVec3 = Vector3<f64>;

/// RGB display color; the core never reads it
pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec3, // world coordinates
    pub velocity: NVec3,
    pub force: NVec3, // net force for the current step
    pub radius: f64, // display only
    pub color: Color, // display only
    pub anchor: Option<NVec3>, // pinned point, re-applied after each step
    mass: f64,
    time_step: f64,
    history: PositionHistory,
}

impl Body {
    /// Build a body at rest with zero force
    ///
    /// The history starts out holding `position`. Fails when `mass` or `time_step`
    /// is not strictly positive, or when `retention` is malformed
    pub fn new(
        position: NVec3,
        mass: f64,
        time_step: f64,
        retention: RetentionPolicy,
    ) -> Result<Self, ConfigError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        if !(time_step > 0.0 && time_step.is_finite()) {
            return Err(ConfigError::NonPositiveTimeStep(time_step));
        }
        Ok(Self {
            position,
            velocity: NVec3::zeros(),
            force: NVec3::zeros(),
            radius: 10.0,
            color: WHITE,
            anchor: None,
            mass,
            time_step,
            history: PositionHistory::new(position, retention)?,
        })
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Pin the body to its current position
    pub fn anchored(mut self) -> Self {
        self.anchor = Some(self.position);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn add_velocity(&mut self, delta: NVec3) {
        self.velocity += delta;
    }

    pub fn add_force(&mut self, delta: NVec3) {
        self.force += delta;
    }

    pub fn set_force(&mut self, force: NVec3) {
        self.force = force;
    }

    /// Advance one time step with the force currently stored on the body
    ///
    /// Velocity is updated first and the new velocity moves the position:
    /// v += (F / m) dt, then x += v dt
    pub fn advance(&mut self) -> Result<(), SimError> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.mass).into());
        }
        if !(self.time_step > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step).into());
        }
        let dt = self.time_step;
        self.velocity += (self.force / self.mass) * dt;
        self.position += self.velocity * dt;
        Ok(())
    }

    /// Snap back to the anchor, if any
    pub fn apply_anchor(&mut self) {
        if let Some(a) = self.anchor {
            self.position = a;
        }
    }

    pub fn append_position(&mut self, p: NVec3) {
        self.history.push(p);
    }

    /// Append the current position to the history
    pub fn record_position(&mut self) {
        self.history.push(self.position);
    }

    pub fn momentum(&self) -> NVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // time
    pub steps: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Pairwise potential energy, -G m_i m_j / sqrt(r^2 + eps^2), summed over i < j
    pub fn potential_energy(&self, g: f64, softening: f64) -> f64 {
        let eps2 = softening * softening;
        let mut u = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let d = ((bj.position - bi.position).norm_squared() + eps2).sqrt();
                u -= g * bi.mass * bj.mass / d;
            }
        }
        u
    }

    /// True when no position, velocity or force holds a NaN or infinity
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| {
            b.position.iter().all(|c| c.is_finite())
                && b.velocity.iter().all(|c| c.is_finite())
                && b.force.iter().all(|c| c.is_finite())
        })
    }
}
