use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcm_dp::{min_cost, parse_chain, MatrixChainProblem};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dims(rng: &mut StdRng, matrices: usize) -> Vec<u64> {
    (0..=matrices).map(|_| rng.gen_range(1..=1000)).collect()
}

fn chain_text(p: &[u64]) -> String {
    let pairs: Vec<String> = p
        .windows(2)
        .map(|w| format!("{{{}, {}}}", w[0], w[1]))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

fn bench_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let mut group = c.benchmark_group("solve");
    for &n in &[16usize, 64, 128] {
        let p = random_dims(&mut rng, n);
        group.bench_with_input(BenchmarkId::new("min_cost", n), &p, |b, p| {
            b.iter(|| black_box(min_cost(black_box(p)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("parenthesize", n), &p, |b, p| {
            b.iter(|| {
                let solution = MatrixChainProblem::new(p.clone())
                    .unwrap()
                    .solve()
                    .unwrap();
                black_box(solution.parenthesization().to_string())
            });
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA1B2C3D4);
    let text = chain_text(&random_dims(&mut rng, 512));
    c.bench_function("parse_chain_512", |b| {
        b.iter(|| black_box(parse_chain(black_box(&text)).unwrap()));
    });
}

criterion_group!(benches, bench_solve, bench_parse);
criterion_main!(benches);
