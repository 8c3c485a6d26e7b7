// Copyright (c) 2025 Midpoint Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use midpoint_core::round::divround::{divround_i32, divround_i64, divround_u32};
use midpoint_core::round::shiftround::{shiftround_i32, shiftround_i64, shiftround_u32};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const BATCH: usize = 4096;

fn divround_inputs_i32() -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(0xB_E11C);
    (0..BATCH)
        .map(|_| {
            let dividend = rng.random::<i32>();
            let mut divisor = rng.random_range(-10_000..=10_000);
            if divisor == 0 {
                divisor = 1;
            }
            (dividend, divisor)
        })
        .collect()
}

fn shiftround_inputs_i32() -> Vec<(i32, u8)> {
    let mut rng = StdRng::seed_from_u64(0xB_E11D);
    (0..BATCH)
        .map(|_| (rng.random::<i32>(), rng.random_range(1..=30u8)))
        .collect()
}

fn bench_divround(c: &mut Criterion) {
    let inputs = divround_inputs_i32();
    let mut group = c.benchmark_group("divround");
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function("i32", |b| {
        b.iter(|| {
            for &(dividend, divisor) in &inputs {
                black_box(divround_i32(black_box(dividend), black_box(divisor)));
            }
        })
    });
    group.bench_function("u32", |b| {
        b.iter(|| {
            for &(dividend, divisor) in &inputs {
                black_box(divround_u32(
                    black_box(dividend.unsigned_abs()),
                    black_box(divisor.unsigned_abs().max(1)),
                ));
            }
        })
    });
    group.bench_function("i64", |b| {
        b.iter(|| {
            for &(dividend, divisor) in &inputs {
                black_box(divround_i64(
                    black_box(dividend as i64),
                    black_box(divisor as i64),
                ));
            }
        })
    });
    group.finish();
}

fn bench_shiftround(c: &mut Criterion) {
    let inputs = shiftround_inputs_i32();
    let mut group = c.benchmark_group("shiftround");
    group.throughput(Throughput::Elements(BATCH as u64));

    group.bench_function("i32", |b| {
        b.iter(|| {
            for &(value, shift) in &inputs {
                black_box(shiftround_i32(black_box(value), black_box(shift)));
            }
        })
    });
    group.bench_function("u32", |b| {
        b.iter(|| {
            for &(value, shift) in &inputs {
                black_box(shiftround_u32(black_box(value as u32), black_box(shift)));
            }
        })
    });
    group.bench_function("i64", |b| {
        b.iter(|| {
            for &(value, shift) in &inputs {
                black_box(shiftround_i64(black_box(value as i64), black_box(shift)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_divround, bench_shiftround);
criterion_main!(benches);
