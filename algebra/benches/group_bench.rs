use std::hint::black_box;

use algebra::samples::{cyclic, dihedral, symmetric};
use algebra::{Group, Set};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    // Construction is dominated by the n³ associativity scan.
    for n in [16u64, 64] {
        c.bench_function(&format!("cyclic {n}"), |b| {
            b.iter(|| cyclic(black_box(n)).unwrap())
        });
    }

    c.bench_function("dihedral 32", |b| b.iter(|| dihedral(black_box(32)).unwrap()));

    let s4 = symmetric(4).unwrap();
    c.bench_function("commutator subgroup S4", |b| {
        b.iter(|| s4.commutator_subgroup().unwrap())
    });

    let d16 = dihedral(16).unwrap();
    let rotations: Set<_> = d16
        .elements()
        .iter()
        .filter(|x| matches!(x, algebra::samples::Dihedral::Rotation(_)))
        .copied()
        .collect();
    let normal: Group<_> = d16.subgroup(&rotations).unwrap();
    c.bench_function("quotient D16 / C16", |b| {
        b.iter(|| d16.quotient(black_box(&normal)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
