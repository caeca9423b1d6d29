//! Pendulum state: the four integrated quantities plus fixed physical parameters.

use std::ops::{Add, Div, Mul};

use dp_core::{Accel, Length, Mass, Real, Time, ensure_finite, ensure_positive};

use crate::error::SimResult;

/// Configuration variables: angles from the downward vertical (rad) and
/// angular velocities (rad/s). Angles are not wrapped.
///
/// Also used as the derivative vector, in which case the fields hold
/// `(theta1', theta2', omega1', omega2')`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Configuration {
    pub theta1: Real,
    pub theta2: Real,
    pub omega1: Real,
    pub omega2: Real,
}

impl Configuration {
    /// Hanging straight down, at rest.
    pub const REST: Self = Self {
        theta1: 0.0,
        theta2: 0.0,
        omega1: 0.0,
        omega2: 0.0,
    };

    pub fn new(theta1: Real, theta2: Real, omega1: Real, omega2: Real) -> Self {
        Self {
            theta1,
            theta2,
            omega1,
            omega2,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.theta2.is_finite()
            && self.omega1.is_finite()
            && self.omega2.is_finite()
    }
}

impl Add for Configuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            theta1: self.theta1 + rhs.theta1,
            theta2: self.theta2 + rhs.theta2,
            omega1: self.omega1 + rhs.omega1,
            omega2: self.omega2 + rhs.omega2,
        }
    }
}

impl Mul<Real> for Configuration {
    type Output = Self;

    fn mul(self, k: Real) -> Self {
        Self {
            theta1: self.theta1 * k,
            theta2: self.theta2 * k,
            omega1: self.omega1 * k,
            omega2: self.omega2 * k,
        }
    }
}

impl Div<Real> for Configuration {
    type Output = Self;

    fn div(self, k: Real) -> Self {
        Self {
            theta1: self.theta1 / k,
            theta2: self.theta2 / k,
            omega1: self.omega1 / k,
            omega2: self.omega2 / k,
        }
    }
}

/// Fixed physical parameters and the integration timestep.
///
/// Fields are public so the dynamics can be probed with arbitrary values;
/// [`PendulumParams::new`] and [`PendulumState::new`] enforce strict positivity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParams {
    /// Rod lengths (m)
    pub length1: Real,
    pub length2: Real,
    /// Bob masses (kg)
    pub mass1: Real,
    pub mass2: Real,
    /// Gravitational acceleration (m/s^2)
    pub gravity: Real,
    /// Fixed integration timestep (s)
    pub dt: Real,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            length1: 1.0,
            length2: 1.0,
            mass1: 1.0,
            mass2: 1.0,
            gravity: dp_core::constants::G_MPS2,
            dt: 0.01,
        }
    }
}

impl PendulumParams {
    pub fn new(
        length1: Real,
        length2: Real,
        mass1: Real,
        mass2: Real,
        gravity: Real,
        dt: Real,
    ) -> SimResult<Self> {
        let params = Self {
            length1,
            length2,
            mass1,
            mass2,
            gravity,
            dt,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build from typed SI quantities.
    pub fn from_quantities(
        length1: Length,
        length2: Length,
        mass1: Mass,
        mass2: Mass,
        gravity: Accel,
        dt: Time,
    ) -> SimResult<Self> {
        use uom::si::{acceleration::meter_per_second_squared, length::meter, mass::kilogram};
        use uom::si::time::second;

        Self::new(
            length1.get::<meter>(),
            length2.get::<meter>(),
            mass1.get::<kilogram>(),
            mass2.get::<kilogram>(),
            gravity.get::<meter_per_second_squared>(),
            dt.get::<second>(),
        )
    }

    pub fn validate(&self) -> SimResult<()> {
        ensure_positive(self.length1, "length1")?;
        ensure_positive(self.length2, "length2")?;
        ensure_positive(self.mass1, "mass1")?;
        ensure_positive(self.mass2, "mass2")?;
        ensure_positive(self.gravity, "gravity")?;
        ensure_positive(self.dt, "dt")?;
        Ok(())
    }

    /// Total rod length, the reach of bob 2 from the pivot.
    pub fn reach(&self) -> Real {
        self.length1 + self.length2
    }

    /// Same parameters with new bob masses. Callers guarantee positivity.
    pub(crate) fn with_masses(self, mass1: Real, mass2: Real) -> Self {
        debug_assert!(mass1 > 0.0 && mass2 > 0.0);
        Self {
            mass1,
            mass2,
            ..self
        }
    }
}

/// Complete pendulum state at one instant.
///
/// Only the configuration is mutated by integration; parameters change only
/// when the whole state is replaced on reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    pub config: Configuration,
    params: PendulumParams,
}

impl Default for PendulumState {
    /// theta 0.5/0.5 rad, omega 4/5 rad/s, unit rods and masses, g = 9.81, dt = 0.01.
    fn default() -> Self {
        Self {
            config: Configuration::new(0.5, 0.5, 4.0, 5.0),
            params: PendulumParams::default(),
        }
    }
}

impl PendulumState {
    /// Rejects non-positive parameters and non-finite initial conditions.
    pub fn new(config: Configuration, params: PendulumParams) -> SimResult<Self> {
        params.validate()?;
        ensure_finite(config.theta1, "theta1")?;
        ensure_finite(config.theta2, "theta2")?;
        ensure_finite(config.omega1, "omega1")?;
        ensure_finite(config.omega2, "omega2")?;
        Ok(Self { config, params })
    }

    /// Replace the configuration, keeping parameters. Values are not checked so
    /// that non-finite results of a singular step propagate.
    pub fn with_config(self, config: Configuration) -> Self {
        Self { config, ..self }
    }

    pub(crate) fn from_parts(config: Configuration, params: PendulumParams) -> Self {
        Self { config, params }
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn dt(&self) -> Real {
        self.params.dt
    }
}
