//! Overflow and underflow prevention for repeated accumulation
//!
//! Computes `start + step * count` and `start - step * count` one step at a time,
//! for every primitive numeric type, checking each step against the limits of the
//! type *before* performing it. The first step that would leave the range is
//! rejected, and the last safe value is returned together with a failure flag.
//!
//! Nothing saturates, wraps, or continues after a rejected step.
//! A rejected step is not an error either: it is part of the result.
//!
//! ## Example
//!
//! ```
//! use numeric_overflows::{bounded_add, bounded_sub};
//!
//! let r = bounded_add(0i32, i32::MAX / 5, 6);
//! assert!(r.range_exceeded());
//! assert_eq!(r.value(), 2147483645);
//!
//! let r = bounded_sub(255u8, 51, 5);
//! assert_eq!(r.into_result(), Ok(0));
//! ```
//!
//! Supported types are `i8`, `i16`, `i32`, `i64`, `i128`, `isize`,
//! `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `f32` and `f64`.
//! For floats, the range is the finite range; reaching an infinity counts as overflow.
mod accumulate;
mod driver;
pub mod error;
pub mod limits;
mod report;

pub use crate::accumulate::*;
pub use crate::driver::*;
pub use crate::error::{Error, Result};
pub use crate::limits::NumericLimits;
pub use crate::report::*;
