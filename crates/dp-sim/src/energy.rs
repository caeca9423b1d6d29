//! Mechanical energy of a pendulum state. Used to monitor integration drift.

use dp_core::Real;

use crate::state::PendulumState;

/// Kinetic energy (J).
pub fn kinetic_energy(state: &PendulumState) -> Real {
    let p = state.params();
    let c = &state.config;
    let coupling = (c.theta1 - c.theta2).cos();

    0.5 * (p.mass1 + p.mass2) * p.length1 * p.length1 * c.omega1 * c.omega1
        + 0.5 * p.mass2 * p.length2 * p.length2 * c.omega2 * c.omega2
        + p.mass2 * p.length1 * p.length2 * c.omega1 * c.omega2 * coupling
}

/// Potential energy (J), zero at the pivot height, y measured downwards.
pub fn potential_energy(state: &PendulumState) -> Real {
    let p = state.params();
    let c = &state.config;

    -(p.mass1 + p.mass2) * p.gravity * p.length1 * c.theta1.cos()
        - p.mass2 * p.gravity * p.length2 * c.theta2.cos()
}

pub fn total_energy(state: &PendulumState) -> Real {
    kinetic_energy(state) + potential_energy(state)
}

/// Depth of the potential well, `(m1 + m2) g L1 + m2 g L2`. Strictly positive
/// for valid parameters.
pub fn energy_scale(state: &PendulumState) -> Real {
    let p = state.params();
    (p.mass1 + p.mass2) * p.gravity * p.length1 + p.mass2 * p.gravity * p.length2
}

/// Change of total energy from `initial` to `current`, relative to
/// `max(|E0|, energy_scale)`.
///
/// Potential energy is measured from the pivot, so `E0` can be zero for a
/// valid start (rods horizontal, at rest); the well depth bounds the divisor
/// away from zero.
pub fn relative_drift(initial: &PendulumState, current: &PendulumState) -> Real {
    let e0 = total_energy(initial);
    let e1 = total_energy(current);
    (e1 - e0).abs() / e0.abs().max(energy_scale(initial))
}
