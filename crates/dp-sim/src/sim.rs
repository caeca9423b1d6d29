//! Headless simulation runner and result recording.

use dp_core::Real;

use crate::error::{SimError, SimResult};
use crate::integrator::IntegratorType;
use crate::model::TransientModel;

/// Options for batch runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: Real,
    /// Final simulation time (seconds)
    pub t_end: Real,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_end: 10.0,
            max_steps: 100_000,
            record_every: 1,
            integrator: IntegratorType::default(),
        }
    }
}

impl SimOptions {
    /// Exactly `steps` steps of size `dt`.
    pub fn for_steps(dt: Real, steps: usize) -> Self {
        Self {
            dt,
            t_end: dt * steps as Real,
            max_steps: steps,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if self.t_end.is_nan() || self.t_end < 0.0 {
            return Err(SimError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<Real>,
    /// State snapshots
    pub x: Vec<S>,
}

impl<S> SimRecord<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last(&self) -> Option<(Real, &S)> {
        Some((*self.t.last()?, self.x.last()?))
    }
}

/// Run a fixed-step simulation from the model's initial state.
///
/// Stops at `t_end` or `max_steps`, whichever comes first. The initial and
/// final states are always recorded.
pub fn run_sim<M: TransientModel>(
    model: &M,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    opts.validate()?;

    tracing::info!(
        dt = opts.dt,
        t_end = opts.t_end,
        integrator = ?opts.integrator,
        "starting run"
    );

    let mut t = 0.0;
    let mut x = model.initial_state();

    let mut t_record = vec![t];
    let mut x_record = vec![x.clone()];

    let mut step = 0;
    // Half-step slack so accumulated rounding in t cannot add a step.
    while t + 0.5 * opts.dt < opts.t_end && step < opts.max_steps {
        x = opts.integrator.step(model, t, &x, opts.dt);
        step += 1;
        t = step as Real * opts.dt;

        if step % opts.record_every == 0 {
            t_record.push(t);
            x_record.push(x.clone());
        }
    }

    if step % opts.record_every != 0 {
        t_record.push(t);
        x_record.push(x);
    }

    tracing::info!(steps = step, records = t_record.len(), "run finished");

    Ok(SimRecord {
        t: t_record,
        x: x_record,
    })
}
