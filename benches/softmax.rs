//! Criterion benchmarks for the two softmax formulations.
//!
//! Measures the literal and the max-shifted path on a demo-scale vector
//! and on a larger one, to show the cost of the extra max pass.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_softmax::softmax::{Stability, softmax_with};

fn make_logits(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7) % 20) as f64 - 5.0).collect()
}

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");

    for &n in &[50usize, 4096] {
        let z = make_logits(n);

        group.bench_function(format!("direct/{n}"), |b| {
            b.iter(|| softmax_with(black_box(&z), Stability::Direct))
        });
        group.bench_function(format!("shift_max/{n}"), |b| {
            b.iter(|| softmax_with(black_box(&z), Stability::ShiftMax))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_softmax);
criterion_main!(benches);
