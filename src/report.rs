//! Reporting layer: runs the driver for every supported type and writes
//! the results as text.
use crate::driver::{test_overflow, test_underflow, TypeReport, DEFAULT_STEPS};
use crate::error::Result;
use crate::limits::NumericLimits;
use log::{info, warn};
use std::io::Write;

/// Separator line framing each section header
pub const STAR_LINE: &str = "**************************************************";

/// The two groups of scenarios
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
	/// Additive scenarios, starting at zero
	Overflow,
	/// Subtractive scenarios, starting at the maximum
	Underflow,
}

impl Section {
	pub fn heading(self) -> &'static str {
		match self {
			Section::Overflow => "*** Running Overflow Tests ***",
			Section::Underflow => "*** Running Underflow Tests ***",
		}
	}

	fn run<T: NumericLimits>(self, steps: u64) -> Result<TypeReport<T>> {
		match self {
			Section::Overflow => test_overflow::<T>(steps),
			Section::Underflow => test_underflow::<T>(steps),
		}
	}
}

/// What to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
	/// Number of steps for the in-range run; the second run uses one more
	pub steps: u64,
	/// Sections to run, in order
	pub sections: Vec<Section>,
}

impl Default for ReportOptions {
	fn default() -> Self {
		ReportOptions {
			steps: DEFAULT_STEPS,
			sections: vec![Section::Overflow, Section::Underflow],
		}
	}
}

/// Counts of a finished run
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Summary {
	/// Type reports written
	pub tested: usize,
	/// Types skipped because the driver could not set up their scenarios
	pub skipped: usize,
	/// Reports in which the second run was stopped
	pub prevented: usize,
}

fn report_type<T: NumericLimits, W: Write>(
	out: &mut W,
	section: Section,
	steps: u64,
	summary: &mut Summary,
) -> Result<()> {
	match section.run::<T>(steps) {
		Ok(report) => {
			write!(out, "{}", report)?;
			summary.tested += 1;
			if report.beyond.result.range_exceeded() {
				summary.prevented += 1;
			}
		}
		Err(e) => {
			warn!("skipping {}: {}", T::TYPE_NAME, e);
			summary.skipped += 1;
		}
	}
	Ok(())
}

macro_rules! report_types {
	($out:expr, $section:expr, $steps:expr, $summary:expr; $($t:ident)*) => {$(
		report_type::<$t, _>($out, $section, $steps, $summary)?;
	)*}
}

/// Write the header of `section` and the report of every supported type.
pub fn run_section<W: Write>(out: &mut W, section: Section, steps: u64) -> Result<Summary> {
	info!("running {:?} section with {} steps", section, steps);
	writeln!(out)?;
	writeln!(out, "{}", STAR_LINE)?;
	writeln!(out, "{}", section.heading())?;
	writeln!(out, "{}", STAR_LINE)?;
	let mut summary = Summary::default();
	// signed integers
	report_types!(out, section, steps, &mut summary; i8 i16 i32 i64 i128 isize);
	// unsigned integers
	report_types!(out, section, steps, &mut summary; u8 u16 u32 u64 u128 usize);
	// real numbers
	report_types!(out, section, steps, &mut summary; f32 f64);
	Ok(summary)
}

/// Write the banner, all selected sections, and the closing line.
///
/// ## Example
/// ```
/// let mut out = Vec::new();
/// let summary = numeric_overflows::run_all(&mut out, &Default::default()).unwrap();
/// assert_eq!(summary.tested, 28);
/// ```
pub fn run_all<W: Write>(out: &mut W, options: &ReportOptions) -> Result<Summary> {
	writeln!(out, "Starting Numeric Underflow / Overflow Tests!")?;
	let mut total = Summary::default();
	for &section in &options.sections {
		let s = run_section(out, section, options.steps)?;
		total.tested += s.tested;
		total.skipped += s.skipped;
		total.prevented += s.prevented;
	}
	writeln!(out)?;
	writeln!(out, "All Numeric Underflow / Overflow Tests Complete!")?;
	info!(
		"{} reports, {} with a prevented step, {} types skipped",
		total.tested, total.prevented, total.skipped
	);
	Ok(total)
}
