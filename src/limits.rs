//! Range information for the primitive numeric types.
//!
//! The set of supported types is closed: every type listed in the
//! `numeric_limits_impl!` invocations below, and nothing else.
use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Sub};
use num_traits::{Bounded, NumCast, Zero};

/// Numeric type with a finite representable range.
///
/// This is pre-generated for the standard numerical types such as `i32`, `u8` and `f64`.
///
/// Character-like C types have no counterpart here: `char` in Rust is not a number.
/// Use `i8`/`u8` for C `char`/`unsigned char` and `i32` for `wchar_t`.
pub trait NumericLimits:
	Copy
	+ PartialOrd
	+ Zero
	+ Bounded
	+ NumCast
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Div<Output = Self>
	+ Debug
	+ Display
{
	/// Rust name of the type, e.g. `"i32"`
	const TYPE_NAME: &'static str;
	/// The C/C++ primitive this type stands in for, e.g. `"int"`
	const C_NAME: &'static str;

	/// Largest finite value
	#[inline]
	fn highest() -> Self {
		Self::max_value()
	}

	/// Lowest finite value (most negative, for floats `-MAX` rather than `MIN_POSITIVE`)
	#[inline]
	fn lowest() -> Self {
		Self::min_value()
	}

	/// Whether `self` lies within `[lowest, highest]`.
	///
	/// False for infinities and NaN.
	#[inline]
	fn is_representable(self) -> bool {
		self >= Self::lowest() && self <= Self::highest()
	}
}

macro_rules! numeric_limits_impl {
	($trait_name:ident for $($t:ident => $c:expr),*) => {$(
		impl $trait_name for $t {
			const TYPE_NAME: &'static str = stringify!($t);
			const C_NAME: &'static str = $c;
		}
	)*}
}
numeric_limits_impl!(NumericLimits for
	i8 => "char", i16 => "short int", i32 => "int", i64 => "long long",
	i128 => "__int128", isize => "long");
numeric_limits_impl!(NumericLimits for
	u8 => "unsigned char", u16 => "unsigned short int", u32 => "unsigned int",
	u64 => "unsigned long long", u128 => "unsigned __int128", usize => "unsigned long");
numeric_limits_impl!(NumericLimits for f32 => "float", f64 => "double");
