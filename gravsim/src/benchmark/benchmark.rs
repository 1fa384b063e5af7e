use std::time::Instant;

use crate::simulation::engine::PhysicsEngine;
use crate::simulation::error::SimError;
use crate::simulation::history::RetentionPolicy;
use crate::simulation::integrator::euler_cromer_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a manual System of size `n`
/// Deterministic positions on a sin/cos lattice, no rand needed
pub fn make_system(n: usize, params: &Parameters) -> Result<System, SimError> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 500.0,
            (i_f * 0.07).sin() * 500.0,
        );
        bodies.push(Body::new(x, 6.0e15, params.dt, RetentionPolicy::Ring { capacity: 1 })?);
    }

    Ok(System::new(bodies))
}

/// Benchmark parameters: SI gravity, light softening, no history
pub fn make_params() -> Parameters {
    Parameters {
        softening: 1.0,
        record_history: false,
        ..Parameters::default()
    }
}

/// Time one direct force pass for growing N
pub fn bench_gravity() -> Result<(), SimError> {
    let ns = [50, 100, 200, 400, 800, 1600];
    let params = make_params();
    let engine = PhysicsEngine::new(&params)?;

    for n in ns {
        let sys = make_system(n, &params)?;

        // Warm up
        engine.compute_forces(&sys.bodies)?;

        let t0 = Instant::now();
        engine.compute_forces(&sys.bodies)?;
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
    Ok(())
}

/// Time full ticks (forces + integration) for growing N
/// Prints CSV, paste into a spreadsheet to graph
pub fn bench_step_curve() -> Result<(), SimError> {
    println!("N,step_ms");

    let params = make_params();
    let engine = PhysicsEngine::new(&params)?;

    for n in (100..=1600).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 400 { 10 } else { 2 };
        let mut sys = make_system(n, &params)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_cromer_step(&mut sys, &engine, &params)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
