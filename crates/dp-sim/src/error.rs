//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while building or running a simulation.
///
/// Numerical singularities in the equations of motion are not errors; they
/// surface as non-finite values in the state instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] dp_core::DpError),
}

pub type SimResult<T> = Result<T, SimError>;
