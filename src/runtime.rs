//! Runtime for executing a session
//!
//! Owns the [`Session`](crate::state_machine::Session), feeds events through
//! the pure transition function and performs the resulting effects one at a
//! time.

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::SessionRuntime;

use crate::llm::LlmError;
use crate::weather::WeatherError;
use thiserror::Error;

/// Failure of the process sequence; any step aborts the rest
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("The language model request failed: {0}")]
    Llm(#[from] LlmError),
    #[error("{0}")]
    Weather(#[from] WeatherError),
}
