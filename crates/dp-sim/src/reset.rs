//! Randomized re-initialization of the pendulum.

use dp_core::{Real, ensure_positive};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::SimResult;
use crate::state::{Configuration, PendulumState};

/// Distribution parameters for a reset.
///
/// - `theta1 ~ N(0, theta_std)`, `theta2 ~ N(theta1, theta_std)`
/// - `omega1, omega2 ~ N(0, omega_std)` independently
/// - `mass1 = min(mass1_cap, |N(0, 1)|)`
/// - `mass2 = min(mass2_cap_factor * mass1, |N(0, 1)|)`
///
/// Rod lengths, gravity and dt are carried over from the previous state.
///
/// All four values are strictly positive; construct through [`ResetPolicy::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetPolicy {
    theta_std: Real,
    omega_std: Real,
    mass1_cap: Real,
    mass2_cap_factor: Real,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        Self {
            theta_std: 1.5,
            omega_std: 6.0,
            mass1_cap: 10.0,
            mass2_cap_factor: 10.0,
        }
    }
}

impl ResetPolicy {
    pub fn new(
        theta_std: Real,
        omega_std: Real,
        mass1_cap: Real,
        mass2_cap_factor: Real,
    ) -> SimResult<Self> {
        let policy = Self {
            theta_std,
            omega_std,
            mass1_cap,
            mass2_cap_factor,
        };
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> SimResult<()> {
        ensure_positive(self.theta_std, "theta_std")?;
        ensure_positive(self.omega_std, "omega_std")?;
        ensure_positive(self.mass1_cap, "mass1_cap")?;
        ensure_positive(self.mass2_cap_factor, "mass2_cap_factor")?;
        Ok(())
    }

    pub fn theta_std(&self) -> Real {
        self.theta_std
    }

    pub fn omega_std(&self) -> Real {
        self.omega_std
    }

    pub fn mass1_cap(&self) -> Real {
        self.mass1_cap
    }

    pub fn mass2_cap_factor(&self) -> Real {
        self.mass2_cap_factor
    }

    /// Draw a fresh state from `rng`, keeping the previous lengths, gravity and dt.
    pub fn apply<R: Rng + ?Sized>(&self, previous: &PendulumState, rng: &mut R) -> PendulumState {
        let theta1 = self.theta_std * normal(rng);
        let theta2 = theta1 + self.theta_std * normal(rng);
        let omega1 = self.omega_std * normal(rng);
        let omega2 = self.omega_std * normal(rng);

        let mass1 = half_normal(rng).min(self.mass1_cap);
        let mass2 = half_normal(rng).min(self.mass2_cap_factor * mass1);

        tracing::debug!(
            theta1,
            theta2,
            omega1,
            omega2,
            mass1,
            mass2,
            "pendulum reset"
        );

        let params = previous.params().with_masses(mass1, mass2);
        PendulumState::from_parts(Configuration::new(theta1, theta2, omega1, omega2), params)
    }
}

fn normal<R: Rng + ?Sized>(rng: &mut R) -> Real {
    Distribution::<Real>::sample(&StandardNormal, rng)
}

/// `|N(0, 1)|`, redrawn on an exact zero so masses stay strictly positive.
fn half_normal<R: Rng + ?Sized>(rng: &mut R) -> Real {
    loop {
        let v = normal(rng).abs();
        if v > 0.0 {
            return v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PendulumParams;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn custom_state() -> PendulumState {
        let params = PendulumParams::new(0.8, 1.2, 1.0, 1.0, 3.7, 0.005).unwrap();
        PendulumState::new(Configuration::REST, params).unwrap()
    }

    #[test]
    fn keeps_lengths_gravity_and_dt() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let prev = custom_state();
        let next = ResetPolicy::default().apply(&prev, &mut rng);

        assert_eq!(next.params().length1, 0.8);
        assert_eq!(next.params().length2, 1.2);
        assert_eq!(next.params().gravity, 3.7);
        assert_eq!(next.dt(), 0.005);
        assert!(next.params().validate().is_ok());
    }

    #[test]
    fn same_seed_same_reset() {
        let prev = PendulumState::default();
        let a = ResetPolicy::default().apply(&prev, &mut Pcg64Mcg::seed_from_u64(42));
        let b = ResetPolicy::default().apply(&prev, &mut Pcg64Mcg::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_positive_policy() {
        assert!(ResetPolicy::new(0.0, 6.0, 10.0, 10.0).is_err());
        assert!(ResetPolicy::new(1.5, 6.0, 0.0, 10.0).is_err());
        assert!(ResetPolicy::new(1.5, 6.0, 10.0, -1.0).is_err());
        assert!(ResetPolicy::new(1.5, f64::NAN, 10.0, 10.0).is_err());
        assert_eq!(
            ResetPolicy::new(1.5, 6.0, 10.0, 10.0).unwrap(),
            ResetPolicy::default()
        );
    }

    #[test]
    fn tight_caps_keep_masses_positive() {
        let policy = ResetPolicy::new(1.5, 6.0, 1e-3, 1e-3).unwrap();
        assert_eq!(policy.mass1_cap(), 1e-3);
        assert_eq!(policy.mass2_cap_factor(), 1e-3);

        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let mut state = PendulumState::default();
        for _ in 0..200 {
            state = policy.apply(&state, &mut rng);
            let p = state.params();
            assert!(p.mass1 > 0.0 && p.mass1 <= 1e-3);
            assert!(p.mass2 > 0.0 && p.mass2 <= 1e-3 * p.mass1);
            assert!(p.validate().is_ok());
        }
    }

    #[test]
    fn theta2_is_centered_on_theta1() {
        let policy = ResetPolicy::default();
        let prev = PendulumState::default();
        let mut rng = Pcg64Mcg::seed_from_u64(2024);

        let n = 20_000;
        let mut sum_offset = 0.0;
        let mut sum_sq_offset = 0.0;
        let mut sum_theta1 = 0.0;
        for _ in 0..n {
            let s = policy.apply(&prev, &mut rng);
            let offset = s.config.theta2 - s.config.theta1;
            sum_offset += offset;
            sum_sq_offset += offset * offset;
            sum_theta1 += s.config.theta1;
        }
        let mean_offset = sum_offset / n as f64;
        let std_offset = (sum_sq_offset / n as f64 - mean_offset * mean_offset).sqrt();

        // Standard error of the mean is 1.5 / sqrt(20000) ~ 0.011.
        assert!(mean_offset.abs() < 0.06, "mean offset {mean_offset}");
        assert!((std_offset - 1.5).abs() < 0.06, "offset std {std_offset}");
        assert!((sum_theta1 / n as f64).abs() < 0.06);
    }

    proptest! {
        #[test]
        fn mass_bounds_hold(seed in any::<u64>()) {
            let policy = ResetPolicy::default();
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut state = PendulumState::default();
            for _ in 0..16 {
                state = policy.apply(&state, &mut rng);
                let p = state.params();
                prop_assert!(p.mass1 > 0.0 && p.mass1 <= 10.0);
                prop_assert!(p.mass2 > 0.0 && p.mass2 <= 10.0 * p.mass1);
                prop_assert!(state.config.is_finite());
            }
        }
    }
}
