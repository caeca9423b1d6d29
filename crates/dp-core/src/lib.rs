//! dp-core: stable foundation for the double pendulum workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - timing (opt-in wall clock timers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::{DpError, DpResult};
pub use numeric::*;
pub use units::*;
