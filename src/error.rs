//! Errors of the test driver and the reporting layer.
//!
//! The accumulation routines themselves never fail: a rejected step is part of
//! their result, not an error.
use thiserror::Error;

/// Result type for driver and report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the per-type scenarios
#[derive(Error, Debug)]
pub enum Error {
	/// The increment `max / steps` is undefined for zero steps
	#[error("the number of steps must be positive")]
	ZeroSteps,

	/// The step count cannot be converted into the type under test
	#[error("{steps} steps cannot be represented as {type_name}")]
	StepsNotRepresentable { type_name: &'static str, steps: u64 },

	/// Writing the report failed
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
