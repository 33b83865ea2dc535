use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rmatsim::{Gate, Matrix};

fn invertible(n: usize, rng: &mut StdRng) -> Matrix {
    let mut a = Matrix::random(n, n, rng);
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4, 16, 64, 128] {
        let a = Matrix::random(n, n, &mut rng);
        let b = Matrix::random(n, n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&a).try_mul(black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4, 16, 64] {
        let a = invertible(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&a).inverse().unwrap());
        });
    }

    group.finish();
}

fn bench_combine_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_gates");

    for num_qubits in [2, 4, 6] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{num_qubits}_qubits")),
            &num_qubits,
            |bench, &num_qubits| {
                bench.iter(|| {
                    let mut gate = Gate::hadamard();
                    for _ in 1..num_qubits {
                        gate = gate.combine_gates(black_box(&Gate::hadamard()));
                    }
                    gate
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_inverse, bench_combine_gates);
criterion_main!(benches);
