//! Fixed-step time integration for the simulation
//!
//! One Euler-Cromer step per tick: forces come from a single snapshot of the
//! positions, then every body updates velocity and position with that force

use super::engine::PhysicsEngine;
use super::error::SimError;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one step
///
/// All forces are computed before any body is touched, so no body sees a
/// partially updated neighbour. `sys.t` advances by the global `params.dt`;
/// bodies with their own time step integrate with that step instead
pub fn euler_cromer_step(
    sys: &mut System,
    engine: &PhysicsEngine,
    params: &Parameters,
) -> Result<(), SimError> {
    if sys.bodies.is_empty() { // no bodies, return
        return Ok(());
    }

    // F_n from x_n
    let forces = engine.compute_forces(&sys.bodies)?;
    for (b, f) in sys.bodies.iter_mut().zip(forces) {
        b.set_force(f);
    }

    // v_n+1 = v_n + dt F_n / m, then x_n+1 = x_n + dt v_n+1
    for b in sys.bodies.iter_mut() {
        b.advance()?;
    }

    sys.t += params.dt;
    sys.steps += 1;
    Ok(())
}
