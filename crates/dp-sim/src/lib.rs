//! Double pendulum simulation core.
//!
//! Provides:
//! - Pendulum state with validated physical parameters
//! - Closed-form Lagrangian equations of motion
//! - Fixed-step RK4 integrator (and forward Euler for comparison)
//! - Randomized reset with an injectable random source
//! - Frame geometry and the real-time simulation loop
//! - Headless batch runner

pub mod driver;
pub mod dynamics;
pub mod energy;
pub mod error;
pub mod integrator;
pub mod model;
pub mod render;
pub mod reset;
pub mod sim;
pub mod state;

pub use driver::{InputEvent, InputSource, RenderSink, Simulation, TickOutcome};
pub use dynamics::derivative;
pub use energy::{energy_scale, kinetic_energy, potential_energy, relative_drift, total_energy};
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, IntegratorType, RK4, step, step_with};
pub use model::{DoublePendulum, TransientModel};
pub use render::{Frame, Point, Viewport};
pub use reset::ResetPolicy;
pub use sim::{SimOptions, SimRecord, run_sim};
pub use state::{Configuration, PendulumParams, PendulumState};
