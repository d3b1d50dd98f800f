//! Benchmarks for the statevector kernel
//!
//! Run with: cargo bench -p qseek-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use qseek_sim::{Diffusion, Operator, Oracle, Statevector, sample_counts};

/// One oracle + diffusion round at increasing register widths
fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_round");

    for num_qubits in &[4_u32, 8, 12, 16, 20] {
        group.bench_with_input(
            BenchmarkId::new("functional", num_qubits),
            num_qubits,
            |b, &n| {
                let mut state = Statevector::uniform(n);
                let oracle = Oracle::new(1, n);
                let diffusion = Diffusion::new(n);
                b.iter(|| {
                    oracle.apply(black_box(&mut state));
                    diffusion.apply(black_box(&mut state));
                });
            },
        );
    }

    for num_qubits in &[4_u32, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("gate_level", num_qubits),
            num_qubits,
            |b, &n| {
                let mut state = Statevector::uniform(n);
                let oracle = Oracle::new(1, n);
                let diffusion = Diffusion::new(n);
                b.iter(|| {
                    oracle.apply_gates(black_box(&mut state));
                    diffusion.apply_gates(black_box(&mut state));
                });
            },
        );
    }

    group.finish();
}

/// Measurement sampling
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for num_qubits in &[4_u32, 10, 16] {
        group.bench_with_input(
            BenchmarkId::new("1024_shots", num_qubits),
            num_qubits,
            |b, &n| {
                let state = Statevector::uniform(n);
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| sample_counts(black_box(&state), 1024, &mut rng).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_round, bench_sampling);
criterion_main!(benches);
