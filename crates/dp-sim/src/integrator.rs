//! Fixed-step time integrators.

use dp_core::Real;

use crate::model::{DoublePendulum, TransientModel};
use crate::state::PendulumState;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(&self, model: &M, t: Real, x: &M::State, dt: Real) -> M::State;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    /// Increments are formed as `(k * dt) / 2` and `(k_sum * dt) / 6`, in that
    /// order, so results match `y + (k1 + 2k2 + 2k3 + k4) * dt / 6` bit for bit.
    fn step<M: TransientModel>(&self, model: &M, t: Real, x: &M::State, dt: Real) -> M::State {
        let half = dt / 2.0;

        let k1 = model.rhs(t, x);

        let x2 = model.add(x, &model.div(&model.scale(&k1, dt), 2.0));
        let k2 = model.rhs(t + half, &x2);

        let x3 = model.add(x, &model.div(&model.scale(&k2, dt), 2.0));
        let k3 = model.rhs(t + half, &x3);

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4);

        // k1 + 2*k2 + 2*k3 + k4, summed left to right
        let k_sum = model.add(
            &model.add(
                &model.add(&k1, &model.scale(&k2, 2.0)),
                &model.scale(&k3, 2.0),
            ),
            &k4,
        );

        model.add(x, &model.div(&model.scale(&k_sum, dt), 6.0))
    }
}

/// Forward Euler (explicit, 1st order). One rhs call per step; kept as a
/// low-accuracy reference for comparing against RK4.
#[derive(Clone, Copy, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(&self, model: &M, t: Real, x: &M::State, dt: Real) -> M::State {
        let xdot = model.rhs(t, x);
        model.add(x, &model.scale(&xdot, dt))
    }
}

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

impl IntegratorType {
    pub fn step<M: TransientModel>(self, model: &M, t: Real, x: &M::State, dt: Real) -> M::State {
        match self {
            IntegratorType::RK4 => RK4.step(model, t, x, dt),
            IntegratorType::ForwardEuler => ForwardEuler.step(model, t, x, dt),
        }
    }
}

/// Advance a pendulum state by exactly its own `dt` with RK4.
///
/// Parameters pass through unchanged. Non-finite values are propagated,
/// never clamped.
pub fn step(state: &PendulumState) -> PendulumState {
    step_with(IntegratorType::RK4, state)
}

pub fn step_with(integrator: IntegratorType, state: &PendulumState) -> PendulumState {
    let model = DoublePendulum::new(state);
    let next = integrator.step(&model, 0.0, &state.config, state.dt());
    state.with_config(next)
}
