//! Scene schema definitions.

use dp_core::{kg, m, mps2, s};
use dp_sim::{Configuration, PendulumParams, PendulumState, ResetPolicy, Viewport};
use serde::{Deserialize, Serialize};

use crate::ProjectResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub pendulum: PendulumDef,
    #[serde(default)]
    pub display: DisplayDef,
    #[serde(default)]
    pub reset: ResetDef,
    /// Seed for reset sampling; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Double Pendulum".to_string(),
            pendulum: PendulumDef::default(),
            display: DisplayDef::default(),
            reset: ResetDef::default(),
            seed: None,
        }
    }
}

impl Scene {
    pub fn initial_state(&self) -> ProjectResult<PendulumState> {
        let p = &self.pendulum;
        // Scene values are SI: metres, kilograms, m/s^2, seconds.
        let params = PendulumParams::from_quantities(
            m(p.length1),
            m(p.length2),
            kg(p.mass1),
            kg(p.mass2),
            mps2(p.gravity),
            s(p.dt),
        )?;
        let config = Configuration::new(p.theta1, p.theta2, p.omega1, p.omega2);
        Ok(PendulumState::new(config, params)?)
    }

    pub fn reset_policy(&self) -> ProjectResult<ResetPolicy> {
        let r = &self.reset;
        Ok(ResetPolicy::new(
            r.theta_std,
            r.omega_std,
            r.mass1_cap,
            r.mass2_cap_factor,
        )?)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.display.width, self.display.height)
    }
}

/// Initial conditions (rad, rad/s) and physical parameters (SI).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PendulumDef {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
    pub length1: f64,
    pub length2: f64,
    pub mass1: f64,
    pub mass2: f64,
    pub gravity: f64,
    pub dt: f64,
}

impl Default for PendulumDef {
    fn default() -> Self {
        Self::from(&PendulumState::default())
    }
}

impl From<&PendulumState> for PendulumDef {
    fn from(state: &PendulumState) -> Self {
        let c = &state.config;
        let p = state.params();
        Self {
            theta1: c.theta1,
            theta2: c.theta2,
            omega1: c.omega1,
            omega2: c.omega2,
            length1: p.length1,
            length2: p.length2,
            mass1: p.mass1,
            mass2: p.mass2,
            gravity: p.gravity,
            dt: p.dt,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayDef {
    pub width: u32,
    pub height: u32,
    /// Target ticks per second.
    pub fps: u32,
}

impl Default for DisplayDef {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: viewport.width,
            height: viewport.height,
            fps: 40,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResetDef {
    pub theta_std: f64,
    pub omega_std: f64,
    pub mass1_cap: f64,
    pub mass2_cap_factor: f64,
}

impl Default for ResetDef {
    fn default() -> Self {
        let policy = ResetPolicy::default();
        Self {
            theta_std: policy.theta_std(),
            omega_std: policy.omega_std(),
            mass1_cap: policy.mass1_cap(),
            mass2_cap_factor: policy.mass2_cap_factor(),
        }
    }
}
