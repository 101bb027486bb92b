//! Per-type test driver.
//!
//! Runs each accumulation direction twice for a type `T`: once with `steps`
//! steps of `max / steps`, which stays in range, and once with one more step,
//! which does not.
use crate::accumulate::{bounded_accumulate, AccumulationResult, Direction};
use crate::error::{Error, Result};
use crate::limits::NumericLimits;
use core::fmt;
use log::debug;

/// Number of steps used by default
pub const DEFAULT_STEPS: u64 = 5;

/// Arguments of one accumulation call
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scenario<T> {
	pub start: T,
	pub step: T,
	pub steps: u64,
}

/// A scenario together with its outcome
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Run<T> {
	pub scenario: Scenario<T>,
	pub result: AccumulationResult<T>,
}

impl<T: NumericLimits> Run<T> {
	fn execute(direction: Direction, scenario: Scenario<T>) -> Self {
		let result = bounded_accumulate(direction, scenario.start, scenario.step, scenario.steps);
		if result.range_exceeded() {
			debug!(
				"{} {} prevented in {} after {} of {} steps, last safe value {}",
				T::TYPE_NAME,
				direction.exceeded_label().to_lowercase(),
				match direction {
					Direction::Add => "addition",
					Direction::Subtract => "subtraction",
				},
				result.steps_taken(),
				scenario.steps,
				result.value()
			);
		}
		Run { scenario, result }
	}
}

/// Both runs of one direction for one type
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TypeReport<T> {
	pub direction: Direction,
	pub type_name: &'static str,
	pub c_name: &'static str,
	/// `steps` steps, expected to stay within range
	pub within: Run<T>,
	/// `steps + 1` steps, expected to exceed the range
	pub beyond: Run<T>,
}

/// Derive the per-step amount `max / steps`
fn increment<T: NumericLimits>(steps: u64) -> Result<T> {
	if steps == 0 {
		return Err(Error::ZeroSteps);
	}
	let divisor: T = num_traits::cast(steps).ok_or(Error::StepsNotRepresentable {
		type_name: T::TYPE_NAME,
		steps,
	})?;
	Ok(T::highest() / divisor)
}

fn run_both<T: NumericLimits>(direction: Direction, start: T, steps: u64) -> Result<TypeReport<T>> {
	let step = increment::<T>(steps)?;
	let more = steps.checked_add(1).ok_or(Error::StepsNotRepresentable {
		type_name: "u64",
		steps,
	})?;
	Ok(TypeReport {
		direction,
		type_name: T::TYPE_NAME,
		c_name: T::C_NAME,
		within: Run::execute(direction, Scenario { start, step, steps }),
		beyond: Run::execute(direction, Scenario { start, step, steps: more }),
	})
}

/// Add `max / steps` to zero, `steps` and `steps + 1` times.
///
/// ## Example
/// ```
/// let report = numeric_overflows::test_overflow::<i32>(5).unwrap();
/// assert!(!report.within.result.range_exceeded());
/// assert!(report.beyond.result.range_exceeded());
/// assert_eq!(report.beyond.result.value(), 2147483645);
/// ```
pub fn test_overflow<T: NumericLimits>(steps: u64) -> Result<TypeReport<T>> {
	run_both(Direction::Add, T::zero(), steps)
}

/// Subtract `max / steps` from `max`, `steps` and `steps + 1` times.
///
/// For unsigned types the second run is stopped at zero;
/// signed types and floats stay in range, as `-max` is representable.
pub fn test_underflow<T: NumericLimits>(steps: u64) -> Result<TypeReport<T>> {
	run_both(Direction::Subtract, T::highest(), steps)
}

impl<T: NumericLimits> TypeReport<T> {
	fn fmt_run(&self, f: &mut fmt::Formatter<'_>, run: &Run<T>, with: bool) -> fmt::Result {
		let verb = match self.direction {
			Direction::Add => "Adding",
			Direction::Subtract => "Subtracting",
		};
		writeln!(
			f,
			"\t{} Numbers {} Overflow ({}, {}, {}) = {}: {} Result: {}",
			verb,
			if with { "With" } else { "Without" },
			run.scenario.start,
			run.scenario.step,
			run.scenario.steps,
			self.direction.exceeded_label(),
			run.result.range_exceeded(),
			run.result.value()
		)
	}
}

impl<T: NumericLimits> fmt::Display for TypeReport<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"{} Test of Type = {} ({})",
			self.direction.exceeded_label(),
			self.type_name,
			self.c_name
		)?;
		self.fmt_run(f, &self.within, false)?;
		self.fmt_run(f, &self.beyond, true)
	}
}
