use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use num_bigint::BigInt;
use num_rational::BigRational;
use ratsss::{interpolate, reveal, Point, Polynomial, SecretSharing};

const SECRET: [u8; 32] = [0x5a; 32];

fn dealer(c: &mut Criterion) {
    let sss = SecretSharing(16);
    let mut dealer = sss.dealer(&SECRET).unwrap();

    c.bench_function("obtain_shares_dealer", |b| {
        b.iter(|| sss.dealer(black_box(&SECRET)))
    });
    c.bench_function("step_shares_dealer", |b| b.iter(|| dealer.next()));
    c.bench_function("split_16_of_32", |b| {
        b.iter(|| sss.split(black_box(&SECRET), 32))
    });
}

fn recover(c: &mut Criterion) {
    let sss = SecretSharing(16);
    let shares = sss.split(&SECRET, 16).unwrap();

    c.bench_function("recover_secret", |b| b.iter(|| reveal(black_box(&shares))));
}

fn polynomial(c: &mut Criterion) {
    let p = Polynomial::from_integers(1..=64);
    let q = Polynomial::from_integers((1..=64).rev());
    let x = BigRational::new(BigInt::from(7), BigInt::from(3));
    let points: Vec<Point> = (1..=16).map(|x| Point::new(x, x * x - 3)).collect();

    c.bench_function("poly_mul_64", |b| b.iter(|| black_box(&p) * black_box(&q)));
    c.bench_function("poly_eval_64", |b| b.iter(|| black_box(&p).evaluate(&x)));
    c.bench_function("interpolate_16", |b| {
        b.iter(|| interpolate(black_box(&points)))
    });
}

fn share(c: &mut Criterion) {
    let point = Point::new(12, BigInt::from(u128::MAX) * BigInt::from(u128::MAX));
    let bytes = Vec::from(&point);

    c.bench_function("point_from_bytes", |b| {
        b.iter(|| Point::try_from(black_box(bytes.as_slice())))
    });

    c.bench_function("point_to_bytes", |b| {
        b.iter(|| Vec::from(black_box(&point)))
    });
}

criterion_group!(benches, dealer, recover, polynomial, share);
criterion_main!(benches);
