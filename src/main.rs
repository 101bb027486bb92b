//! numeric-overflows: run the overflow and underflow scenarios for every
//! primitive numeric type and print the results.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use numeric_overflows::{run_all, ReportOptions, Section, DEFAULT_STEPS};
use std::io::{self, BufWriter, Write};

#[derive(Parser)]
#[command(name = "numeric-overflows")]
#[command(version)]
#[command(about = "Detect and prevent overflow and underflow in repeated accumulation")]
#[command(long_about = "
Adds max/steps to zero, and subtracts it from max, for every primitive
numeric type: once with <STEPS> steps, which stays in range, and once with
one more step, which would leave the range and is stopped before it happens.

Overflow and underflow are reported as results; the exit code is 0.
")]
struct Cli {
	/// Number of steps for the in-range run
	#[arg(long, default_value_t = DEFAULT_STEPS)]
	steps: u64,

	/// Only run one of the two sections
	#[arg(long, value_enum)]
	only: Option<Only>,

	/// Verbose output (repeat for more)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Only {
	Overflow,
	Underflow,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let level = match cli.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();

	let sections = match cli.only {
		Some(Only::Overflow) => vec![Section::Overflow],
		Some(Only::Underflow) => vec![Section::Underflow],
		None => vec![Section::Overflow, Section::Underflow],
	};
	let options = ReportOptions {
		steps: cli.steps,
		sections,
	};

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	run_all(&mut out, &options)?;
	out.flush()?;
	Ok(())
}
