use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linpoly_arithmetic::Field;
use linpoly_core::{Polynomial, Var, batch};
use pasta_curves::Fp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_polynomial(rng: &mut StdRng, terms: usize, vars: usize) -> Polynomial<Fp> {
    let pairs: Vec<(Var, Fp)> = (0..terms)
        .map(|_| (Var(rng.gen_range(0..vars)), Fp::random(&mut *rng)))
        .collect();
    Polynomial::from_terms(Fp::random(&mut *rng), pairs)
        .into_polynomial()
        .unwrap()
}

fn construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_terms");

    for size in [16, 256, 4096] {
        let mut rng = StdRng::seed_from_u64(1234);
        let pairs: Vec<(Var, Fp)> = (0..size)
            .map(|_| (Var(rng.gen_range(0..size / 2)), Fp::random(&mut rng)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| Polynomial::from_terms(Fp::ONE, pairs.iter().copied()));
        });
    }

    group.finish();
}

fn merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [16, 256, 4096] {
        let mut rng = StdRng::seed_from_u64(1234);
        let p = random_polynomial(&mut rng, size, size * 2);
        let q = random_polynomial(&mut rng, size, size * 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| p.merge(&q));
        });
    }

    group.finish();
}

fn substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute_all");

    for count in [64, 1024] {
        let mut rng = StdRng::seed_from_u64(1234);
        let system: Vec<_> = (0..count)
            .map(|_| random_polynomial(&mut rng, 8, count))
            .collect();
        let bindings: BTreeMap<Var, Fp> = (0..count / 2)
            .map(|_| (Var(rng.gen_range(0..count)), Fp::random(&mut rng)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| batch::substitute_all(&system, &bindings));
        });
    }

    group.finish();
}

criterion_group!(benches, construction, merge, substitution);
criterion_main!(benches);
