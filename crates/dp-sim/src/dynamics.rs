//! Equations of motion of the planar double pendulum.
//!
//! Lagrangian formulation reduced to two coupled equations
//!
//! ```text
//! omega1' + a1 * omega2' = f1
//! omega2' + a2 * omega1' = f2
//! ```
//!
//! solved in closed form. The system is singular where `a1 * a2 == 1`, which
//! for positive masses cannot happen; with a zero `mass1` and aligned rods it
//! does, and the result is non-finite.

use dp_core::Real;

use crate::state::{Configuration, PendulumParams};

/// Time derivative `(theta1', theta2', omega1', omega2')` of a configuration.
///
/// Total over real inputs: no checks are made, so a singular configuration
/// yields infinities or NaN instead of an error.
pub fn derivative(config: Configuration, params: &PendulumParams) -> Configuration {
    let Configuration {
        theta1,
        theta2,
        omega1,
        omega2,
    } = config;
    let PendulumParams {
        length1: l1,
        length2: l2,
        mass1: m1,
        mass2: m2,
        gravity: g,
        ..
    } = *params;

    let delta = theta1 - theta2;
    let (sin_d, cos_d) = delta.sin_cos();
    let inertia1 = l1 * m1 + l1 * m2;

    let a1 = l2 * m2 * cos_d / inertia1;
    let a2 = l1 * cos_d / l2;

    let f1 = -g * theta1.sin() / l1 - l2 * m2 * omega2 * omega2 * sin_d / inertia1;
    let f2 = -g * theta2.sin() / l2 + l1 * omega1 * omega1 * sin_d / l2;

    let det: Real = 1.0 - a1 * a2;

    Configuration {
        theta1: omega1,
        theta2: omega2,
        omega1: (f1 - a1 * f2) / det,
        omega2: (f2 - a2 * f1) / det,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_params() -> PendulumParams {
        PendulumParams::default()
    }

    #[test]
    fn rest_has_zero_derivative() {
        let d = derivative(Configuration::REST, &unit_params());
        assert_eq!(d, Configuration::REST);
    }

    #[test]
    fn velocities_pass_through() {
        let config = Configuration::new(0.3, -0.2, 1.25, -4.0);
        let d = derivative(config, &unit_params());
        assert_eq!(d.theta1, 1.25);
        assert_eq!(d.theta2, -4.0);
    }

    #[test]
    fn gravity_restores_displaced_rods() {
        // Both rods displaced the same way: the upper rod is pulled back.
        let d = derivative(Configuration::new(0.2, 0.2, 0.0, 0.0), &unit_params());
        assert!(d.omega1 < 0.0);
        // With aligned rods the coupling makes the lower rod's acceleration vanish.
        assert!(d.omega2.abs() < 1e-12);
    }

    #[test]
    fn matches_hand_computed_values() {
        let params = PendulumParams {
            length1: 1.0,
            length2: 2.0,
            mass1: 1.0,
            mass2: 3.0,
            gravity: 10.0,
            dt: 0.01,
        };
        // theta1 = theta2 = pi/2, omega = 0: delta = 0, cos = 1, sin = 0.
        let half_pi = std::f64::consts::FRAC_PI_2;
        let d = derivative(Configuration::new(half_pi, half_pi, 0.0, 0.0), &params);

        // a1 = 2*3/4 = 1.5, a2 = 1/2, det = 0.25
        // f1 = -10, f2 = -5
        // omega1' = (-10 + 7.5) / 0.25 = -10
        // omega2' = (-5 + 5) / 0.25 = 0
        assert!((d.omega1 + 10.0).abs() < 1e-12);
        assert!(d.omega2.abs() < 1e-12);
    }

    #[test]
    fn singular_configuration_returns_non_finite() {
        // mass1 = 0 with aligned rods gives a1 = a2 = 1.
        let params = PendulumParams {
            mass1: 0.0,
            ..unit_params()
        };
        let d = derivative(Configuration::new(0.4, 0.4, 1.0, 1.0), &params);
        assert!(!d.omega1.is_finite());
        assert!(!d.omega2.is_finite());
        assert_eq!(d.theta1, 1.0);
    }

    proptest! {
        #[test]
        fn finite_for_valid_params(
            theta1 in -10.0_f64..10.0,
            theta2 in -10.0_f64..10.0,
            omega1 in -20.0_f64..20.0,
            omega2 in -20.0_f64..20.0,
            mass1 in 0.1_f64..10.0,
            mass2 in 0.1_f64..10.0,
            length1 in 0.1_f64..5.0,
            length2 in 0.1_f64..5.0,
        ) {
            let params = PendulumParams { length1, length2, mass1, mass2, ..unit_params() };
            let d = derivative(Configuration::new(theta1, theta2, omega1, omega2), &params);
            prop_assert!(d.is_finite());
        }

        #[test]
        fn periodic_in_angles(theta1 in -3.0_f64..3.0, theta2 in -3.0_f64..3.0) {
            let tau = std::f64::consts::TAU;
            let a = derivative(Configuration::new(theta1, theta2, 1.0, -1.0), &unit_params());
            let b = derivative(Configuration::new(theta1 + tau, theta2 + tau, 1.0, -1.0), &unit_params());
            prop_assert!((a.omega1 - b.omega1).abs() < 1e-9);
            prop_assert!((a.omega2 - b.omega2).abs() < 1e-9);
        }
    }
}
