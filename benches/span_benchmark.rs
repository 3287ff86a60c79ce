// Copyright (c) 2025 Felix Kahle.
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

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ordspan::span::Span;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const PAIRS: usize = 4096;

/// Deterministic set of valid span bound pairs plus probe values.
fn make_inputs() -> (Vec<Span<i64>>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut spans = Vec::with_capacity(PAIRS);
    let mut probes = Vec::with_capacity(PAIRS);
    for _ in 0..PAIRS {
        let a = rng.gen_range(-1_000_000..1_000_000);
        let b = rng.gen_range(-1_000_000..1_000_000);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        spans.push(Span::new(lo, hi).expect("bounds are ordered"));
        probes.push(rng.gen_range(-1_000_000..1_000_000));
    }
    (spans, probes)
}

fn bench_span_queries(c: &mut Criterion) {
    let (spans, probes) = make_inputs();

    let mut group = c.benchmark_group("span_queries");
    group.throughput(Throughput::Elements(PAIRS as u64));

    group.bench_function("contains", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for (span, probe) in spans.iter().zip(&probes) {
                if black_box(span).contains(black_box(probe)) {
                    hits += 1;
                }
            }
            hits
        })
    });

    group.bench_function("intersection", |b| {
        b.iter(|| {
            let mut empties = 0usize;
            for pair in spans.windows(2) {
                if black_box(&pair[0]).intersection(black_box(&pair[1])).is_empty() {
                    empties += 1;
                }
            }
            empties
        })
    });

    group.bench_function("difference", |b| {
        b.iter(|| {
            let mut parts = 0usize;
            for pair in spans.windows(2) {
                parts += black_box(&pair[0]).difference(black_box(&pair[1])).len();
            }
            parts
        })
    });

    group.finish();
}

criterion_group!(benches, bench_span_queries);
criterion_main!(benches);
