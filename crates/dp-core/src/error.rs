use thiserror::Error;

pub type DpResult<T> = Result<T, DpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
