//! TransientModel trait for pluggable dynamic systems.

use dp_core::Real;

use crate::dynamics::derivative;
use crate::state::{Configuration, PendulumParams, PendulumState};

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Vector arithmetic for integration: add states, scale by scalar,
///   divide by scalar
pub trait TransientModel {
    type State: Clone;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x). Must be pure.
    fn rhs(&self, t: Real, x: &Self::State) -> Self::State;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: Real) -> Self::State;

    /// Divide a state by a scalar: result = a / divisor.
    ///
    /// The default multiplies by the reciprocal, which may differ from exact
    /// division in the last bit.
    fn div(&self, a: &Self::State, divisor: Real) -> Self::State {
        self.scale(a, 1.0 / divisor)
    }
}

/// Double pendulum with fixed parameters, integrating the configuration only.
#[derive(Clone, Debug)]
pub struct DoublePendulum {
    params: PendulumParams,
    initial: Configuration,
}

impl DoublePendulum {
    pub fn new(state: &PendulumState) -> Self {
        Self {
            params: *state.params(),
            initial: state.config,
        }
    }
}

impl TransientModel for DoublePendulum {
    type State = Configuration;

    fn initial_state(&self) -> Configuration {
        self.initial
    }

    fn rhs(&self, _t: Real, x: &Configuration) -> Configuration {
        derivative(*x, &self.params)
    }

    fn add(&self, a: &Configuration, b: &Configuration) -> Configuration {
        *a + *b
    }

    fn scale(&self, a: &Configuration, scale: Real) -> Configuration {
        *a * scale
    }

    fn div(&self, a: &Configuration, divisor: Real) -> Configuration {
        *a / divisor
    }
}
