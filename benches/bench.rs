#![feature(test)]
//! Note that the pre-check is performed on every step, so these measure the
//! cost per step rather than the cost of a single checked operation.
extern crate test;

use numeric_overflows::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use test::{black_box, Bencher};

#[bench]
fn bench_bounded_add_i32(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let step: i32 = rng.gen_range(1..100);
	b.iter(|| {
		let r = bounded_add(black_box(0i32), black_box(step), 10_000);
		black_box(r);
	});
}

#[bench]
fn bench_bounded_sub_u64(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let step: u64 = rng.gen_range(1..100);
	b.iter(|| {
		let r = bounded_sub(black_box(u64::MAX), black_box(step), 10_000);
		black_box(r);
	});
}

#[bench]
fn bench_bounded_add_f64(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let step: f64 = rng.gen_range(-1e300..1e300);
	b.iter(|| {
		let r = bounded_add(black_box(0f64), black_box(step), 10_000);
		black_box(r);
	});
}

#[bench]
fn bench_run_all(b: &mut Bencher) {
	let options = ReportOptions::default();
	b.iter(|| {
		let mut out = Vec::with_capacity(8192);
		let summary = run_all(&mut out, &options).unwrap();
		black_box(summary);
		black_box(out);
	});
}
