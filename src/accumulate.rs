//! Bounded accumulation: `start + step * count` and `start - step * count`
//! computed one step at a time, stopping before the first step that would
//! leave the representable range of the type.
use crate::limits::NumericLimits;

/// Outcome of a bounded accumulation.
///
/// Carries the value reached and whether all steps were applied,
/// instead of overloading some numeric value as an error marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AccumulationResult<T> {
	value: T,
	succeeded: bool,
	steps_taken: u64,
}

impl<T: Copy> AccumulationResult<T> {
	/// The final value, or the last safe value if a step was rejected
	#[inline]
	pub fn value(&self) -> T {
		self.value
	}

	/// True iff every requested step was applied
	#[inline]
	pub fn succeeded(&self) -> bool {
		self.succeeded
	}

	/// True iff a step was rejected because it would leave the range
	#[inline]
	pub fn range_exceeded(&self) -> bool {
		!self.succeeded
	}

	/// Number of steps applied before returning
	#[inline]
	pub fn steps_taken(&self) -> u64 {
		self.steps_taken
	}

	/// `Ok(value)` if all steps were applied, `Err(last safe value)` otherwise
	pub fn into_result(self) -> Result<T, T> {
		if self.succeeded {
			Ok(self.value)
		} else {
			Err(self.value)
		}
	}
}

/// Direction of an accumulation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
	/// `start + step * count`, guarded against overflow
	Add,
	/// `start - step * count`, guarded against underflow
	Subtract,
}

impl Direction {
	/// How a rejected step is reported for this direction
	pub fn exceeded_label(self) -> &'static str {
		match self {
			Direction::Add => "Overflow",
			Direction::Subtract => "Underflow",
		}
	}
}

/// Check that a reached value is a finite, in-range value of its type.
///
/// A NaN step passes the pre-check unchecked, so its results are not asserted.
#[inline]
fn debug_assert_reached<T: NumericLimits>(_value: T, _step: T) {
	#[cfg(feature = "assertions")]
	debug_assert!(
		!is_comparable(_step) || _value.is_representable(),
		"accumulated value {:?} is outside the range of {}",
		_value,
		T::TYPE_NAME
	);
}

/// Whether `step` is ordered against zero; false only for NaN
#[cfg(any(test, feature = "assertions"))]
#[inline]
fn is_comparable<T: NumericLimits>(step: T) -> bool {
	step > T::zero() || step < T::zero() || step == T::zero()
}

/// Add `step` to `start` `count` times, without ever leaving the range of `T`.
///
/// Before each addition the step is checked against the limits of `T`:
/// a positive step is rejected if `current > max - step`,
/// a negative step is rejected if `current < lowest - step`.
/// These bounds never overflow themselves, so the check is safe for integers and floats.
/// A zero step is always safe and returns `start` immediately.
/// A NaN step is neither positive nor negative, so it is applied unchecked.
///
/// * type `T` - a primitive numeric type such as `i32`, `u8` or `f64`
/// * `start` - the value to start with
/// * `step` - how much to add in each step
/// * `count` - the number of steps
///
/// returns the accumulated value, or the last safe value and a failure flag.
///
/// ## Example
/// ```
/// let r = numeric_overflows::bounded_add(0i32, 429496729, 6);
/// assert!(!r.succeeded());
/// assert_eq!(r.value(), 2147483645);
/// ```
pub fn bounded_add<T: NumericLimits>(start: T, step: T, count: u64) -> AccumulationResult<T> {
	if step == T::zero() {
		return AccumulationResult {
			value: start,
			succeeded: true,
			steps_taken: count,
		};
	}
	let mut current = start;
	for i in 0..count {
		let (max, low) = (T::highest(), T::lowest());
		let unsafe_step = if step > T::zero() {
			current > max - step
		} else if step < T::zero() {
			current < low - step
		} else {
			false
		};
		if unsafe_step {
			return AccumulationResult {
				value: current,
				succeeded: false,
				steps_taken: i,
			};
		}
		current = current + step;
		debug_assert_reached(current, step);
	}
	AccumulationResult {
		value: current,
		succeeded: true,
		steps_taken: count,
	}
}

/// Subtract `step` from `start` `count` times, without ever leaving the range of `T`.
///
/// A positive step is rejected if `current < lowest + step`,
/// a negative step (which increases the value) if `current > max + step`.
///
/// ## Example
/// ```
/// let r = numeric_overflows::bounded_sub(255u8, 51, 6);
/// assert!(r.range_exceeded());
/// assert_eq!(r.value(), 0);
/// ```
pub fn bounded_sub<T: NumericLimits>(start: T, step: T, count: u64) -> AccumulationResult<T> {
	if step == T::zero() {
		return AccumulationResult {
			value: start,
			succeeded: true,
			steps_taken: count,
		};
	}
	let mut current = start;
	for i in 0..count {
		let (max, low) = (T::highest(), T::lowest());
		let unsafe_step = if step > T::zero() {
			current < low + step
		} else if step < T::zero() {
			current > max + step
		} else {
			false
		};
		if unsafe_step {
			return AccumulationResult {
				value: current,
				succeeded: false,
				steps_taken: i,
			};
		}
		current = current - step;
		debug_assert_reached(current, step);
	}
	AccumulationResult {
		value: current,
		succeeded: true,
		steps_taken: count,
	}
}

/// Run [`bounded_add`] or [`bounded_sub`], depending on `direction`.
#[inline]
pub fn bounded_accumulate<T: NumericLimits>(
	direction: Direction,
	start: T,
	step: T,
	count: u64,
) -> AccumulationResult<T> {
	match direction {
		Direction::Add => bounded_add(start, step, count),
		Direction::Subtract => bounded_sub(start, step, count),
	}
}
