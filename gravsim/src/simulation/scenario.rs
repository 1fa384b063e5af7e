//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force engine (`PhysicsEngine`)
//!
//! A scenario is owned by whoever drives the loop; `tick` runs one step of the
//! force → integrate → record sequence

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::configuration::config::{vec3, BodyConfig, ScenarioConfig};
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_cromer_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System, WHITE};

/// Mass unit of the random cluster, kilograms
pub const CLUSTER_MASS_UNIT: f64 = 6.0e15;

/// Half-width of the cube satellites and velocity kicks are drawn from
pub const CLUSTER_EXTENT: i32 = 500;

/// Runtime bundle: parameters, current system state and force engine
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub engine: PhysicsEngine,
}

impl Scenario {
    /// Validate `cfg` and map it to runtime types
    ///
    /// Listed bodies come first, in file order, then the random cluster if any
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let parameters = cfg.parameters.to_parameters()?;

        let mut bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &parameters))
            .collect::<Result<Vec<Body>, SimError>>()?;

        if let Some(rc) = &cfg.random {
            let mut rng = ChaChaRng::seed_from_u64(rc.seed);
            bodies.extend(random_cluster(&parameters, rc.count, &mut rng)?);
        }

        Self::from_bodies(parameters, bodies)
    }

    /// Scenario holding only the random cluster
    pub fn random_cluster(
        parameters: Parameters,
        count: usize,
        rng: &mut ChaChaRng,
    ) -> Result<Self, SimError> {
        parameters.validate()?;
        let bodies = random_cluster(&parameters, count, rng)?;
        Self::from_bodies(parameters, bodies)
    }

    pub fn from_bodies(parameters: Parameters, bodies: Vec<Body>) -> Result<Self, SimError> {
        let engine = PhysicsEngine::new(&parameters)?;
        Ok(Self {
            parameters,
            system: System::new(bodies),
            engine,
        })
    }

    /// One simulation tick
    ///
    /// Integrates, snaps anchored bodies back, then records positions when
    /// `record_history` is set. On error the system may hold the assigned forces
    /// but no body has moved
    pub fn tick(&mut self) -> Result<(), SimError> {
        euler_cromer_step(&mut self.system, &self.engine, &self.parameters)?;

        // pin before recording, so an anchored body's trail stays a single point
        for b in self.system.bodies.iter_mut() {
            b.apply_anchor();
        }

        if self.parameters.record_history {
            for b in self.system.bodies.iter_mut() {
                b.record_position();
            }
        }
        Ok(())
    }

    /// Run `steps` ticks, stopping at the first failure
    pub fn run(&mut self, steps: u64) -> Result<(), SimError> {
        for _ in 0..steps {
            self.tick()?;
        }
        Ok(())
    }
}

fn build_body(bc: &BodyConfig, p: &Parameters) -> Result<Body, SimError> {
    let position = vec3("position", &bc.position)?;
    let velocity = vec3("velocity", &bc.velocity)?;
    let dt = bc.time_step.unwrap_or(p.dt);

    let mut body = Body::new(position, bc.mass, dt, p.history)?;
    body.add_velocity(velocity);
    if let Some(r) = bc.radius {
        body = body.with_radius(r);
    }
    if let Some(c) = bc.color {
        body = body.with_color(c);
    }
    if bc.anchored {
        body = body.anchored();
    }
    Ok(body)
}

fn random_ivec3(rng: &mut ChaChaRng, extent: i32) -> NVec3 {
    NVec3::new(
        rng.random_range(-extent..extent) as f64,
        rng.random_range(-extent..extent) as f64,
        rng.random_range(-extent..extent) as f64,
    )
}

/// `count` satellites with integer coordinates and masses k * 6e15 (k in 5..20),
/// plus a white anchored centre of 1000 mass units at the origin. Every body,
/// the centre included, then gets a random integer velocity kick
fn random_cluster(p: &Parameters, count: usize, rng: &mut ChaChaRng) -> Result<Vec<Body>, SimError> {
    let mut bodies = Vec::with_capacity(count + 1);

    for _ in 0..count {
        let position = random_ivec3(rng, CLUSTER_EXTENT);
        let mass = rng.random_range(5..20_i32) as f64 * CLUSTER_MASS_UNIT;
        let color = [rng.random(), rng.random(), rng.random()];
        bodies.push(Body::new(position, mass, p.dt, p.history)?.with_color(color));
    }

    let centre = Body::new(NVec3::zeros(), 1000.0 * CLUSTER_MASS_UNIT, p.dt, p.history)?
        .with_radius(40.0)
        .with_color(WHITE)
        .anchored();
    bodies.push(centre);

    for b in bodies.iter_mut() {
        b.add_velocity(random_ivec3(rng, CLUSTER_EXTENT));
    }
    Ok(bodies)
}
