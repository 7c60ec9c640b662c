//! Crate-wide error type
//!
//! Every fallible operation reports to its immediate caller. Nothing is
//! clamped or guessed on bad input.

use thiserror::Error;

/// Errors raised by pools, cadences, scenes and config loading
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid range for `{field}`: min {min} > max {max} or not finite")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("lifespan must be positive, got min {min}")]
    NonPositiveLifespan { min: f32 },

    #[error("timestep must be finite and non-negative, got {0}")]
    InvalidTimestep(f32),

    #[error("spawn interval must be finite and positive, got {0}")]
    InvalidInterval(f32),

    #[error("{due} spawns due in one step, more than the limit of {limit}")]
    SpawnBacklog { due: f32, limit: u32 },

    #[error("no emitter named `{0}`")]
    UnknownEmitter(String),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject negative, NaN and infinite timesteps
pub(crate) fn check_dt(dt: f32) -> Result<()> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTimestep(dt))
    }
}
